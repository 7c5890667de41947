//! Demonstration records the local backend seeds itself with.

use crate::models::{
    City, Coordinates, ForumCategory, ForumPost, Inquiry, InquiryStatus, LeaseStatus, Property,
    PropertyStatus, PropertyType, RentalPeriod, Review, Tenant,
};

const UNSPLASH: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!(
        "{}/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        UNSPLASH, photo
    )
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The four-listing demo catalog. Rewritten on every activation.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "Modern Apartment in Masaki".into(),
            location: "Masaki, Kinondoni".into(),
            city: City::DarEsSalaam,
            price: 1_500_000,
            period: RentalPeriod::Month,
            bedrooms: 2,
            bathrooms: 2,
            kind: PropertyType::Apartment,
            description_en: "Luxury 2-bedroom apartment with sea view, standby generator, and modern kitchen. Walking distance to supermarkets.".into(),
            description_sw: "Apartment ya kisasa Masaki yenye vyumba viwili, view ya bahari, jenereta, na jiko la kisasa. Ipo karibu na supermarkets.".into(),
            images: vec![
                image("photo-1567684014761-b65e2e59b9eb"),
                image("photo-1600210492486-724fe5c67fb0"),
            ],
            amenities: ids(&["water", "power", "security", "ac", "parking", "wifi"]),
            landlord_id: "L1".into(),
            verified: true,
            coordinates: Some(Coordinates { lat: -6.7483, lng: 39.2796 }),
            reviews: Some(vec![Review {
                id: "r1".into(),
                user_id: "u2".into(),
                user_name: "Grace M.".into(),
                rating: 5,
                comment: "Excellent security and constant water.".into(),
                date: "2023-10-15".into(),
            }]),
            status: PropertyStatus::Active,
        },
        Property {
            id: "2".into(),
            title: "Affordable Room in Sinza".into(),
            location: "Sinza Madukani".into(),
            city: City::DarEsSalaam,
            price: 250_000,
            period: RentalPeriod::Month,
            bedrooms: 1,
            bathrooms: 1,
            kind: PropertyType::Room,
            description_en: "Self-contained room near universities. Tiles, gypsum board ceiling, and shared compound. Water flows daily.".into(),
            description_sw: "Chumba self-contained Sinza. Tiles, gypsum, na uwanja wa kushare. Maji yanatoka kila siku.".into(),
            images: vec![image("photo-1522708323590-d24dbb6b0267")],
            amenities: ids(&["water", "power", "security"]),
            landlord_id: "L2".into(),
            verified: true,
            coordinates: Some(Coordinates { lat: -6.7833, lng: 39.2167 }),
            reviews: None,
            status: PropertyStatus::Active,
        },
        Property {
            id: "3".into(),
            title: "Family House in Dodoma CBD".into(),
            location: "Area D, Dodoma".into(),
            city: City::Dodoma,
            price: 800_000,
            period: RentalPeriod::Month,
            bedrooms: 3,
            bathrooms: 2,
            kind: PropertyType::House,
            description_en: "Spacious 3-bedroom standalone house. Huge garden, perfect for families. Quiet neighborhood.".into(),
            description_sw: "Nyumba kubwa ya vyumba vitatu. Ina bustani kubwa, inafaa sana kwa familia. Eneo tulivu.".into(),
            images: vec![image("photo-1568605114967-8130f3a36994")],
            amenities: ids(&["water", "power", "parking", "security"]),
            landlord_id: "L3".into(),
            verified: false,
            coordinates: Some(Coordinates { lat: -6.1630, lng: 35.7516 }),
            reviews: None,
            status: PropertyStatus::Rented,
        },
        Property {
            id: "4".into(),
            title: "Student Hostel Near UDSM".into(),
            location: "Survey, Ubungo".into(),
            city: City::DarEsSalaam,
            price: 150_000,
            period: RentalPeriod::Month,
            bedrooms: 1,
            bathrooms: 0,
            kind: PropertyType::Hostel,
            description_en: "Shared hostel room for students. Walking distance to UDSM main gate. Secure environment.".into(),
            description_sw: "Hostel ya kushare kwa wanafunzi. Kutembea kidogo tu kufika geti kuu la UDSM. Eneo lenye usalama.".into(),
            images: vec![image("photo-1555854877-bab0e564b8d5")],
            amenities: ids(&["water", "power", "wifi"]),
            landlord_id: "L4".into(),
            verified: true,
            coordinates: Some(Coordinates { lat: -6.7905, lng: 39.2057 }),
            reviews: None,
            status: PropertyStatus::Active,
        },
    ]
}

pub fn inquiries() -> Vec<Inquiry> {
    vec![
        Inquiry {
            id: "i1".into(),
            property_id: "2".into(),
            property_title: "Affordable Room in Sinza".into(),
            tenant_name: "Baraka John".into(),
            tenant_phone: "0712345678".into(),
            message: "Is this room still available? Can I view it tomorrow?".into(),
            date: "2023-11-20".into(),
            status: InquiryStatus::Pending,
        },
        Inquiry {
            id: "i2".into(),
            property_id: "1".into(),
            property_title: "Modern Apartment in Masaki".into(),
            tenant_name: "Sarah Smith".into(),
            tenant_phone: "0755555555".into(),
            message: "Does the price include service charge?".into(),
            date: "2023-11-19".into(),
            status: InquiryStatus::Read,
        },
    ]
}

pub fn tenants() -> Vec<Tenant> {
    vec![Tenant {
        id: "t1".into(),
        name: "Aisha Juma".into(),
        property_id: "3".into(),
        property_title: "Family House in Dodoma CBD".into(),
        lease_start: "2023-01-01".into(),
        lease_end: "2023-12-31".into(),
        status: LeaseStatus::EndingSoon,
        rent_amount: 800_000,
    }]
}

pub fn forum_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: "f1".into(),
            author_name: "John Doe".into(),
            title: "Best areas for UDSM students?".into(),
            content: "I am starting university next month, looking for cheap rentals.".into(),
            category: ForumCategory::Advice,
            likes: 12,
            comments: 4,
            date: "2023-11-20".into(),
        },
        ForumPost {
            id: "f2".into(),
            author_name: "Admin".into(),
            title: "WARNING: Do not pay agents before viewing".into(),
            content: "Many people are getting scammed by fake agents in Sinza.".into(),
            category: ForumCategory::ScamAlert,
            likes: 45,
            comments: 10,
            date: "2023-11-15".into(),
        },
    ]
}
