use chrono::{TimeZone, Utc};

use crate::profiles::{
    BrandProfile, CompanySize, ExpertProfile, PricingRange, Profile, ProfileCategory,
    SocialLinks, SupplierCapability, SupplierProfile, Tag,
};

pub(crate) fn supplier(id: &str, company_name: &str, tags: &[Tag]) -> Profile {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    Profile::Supplier(SupplierProfile {
        id: id.to_string(),
        user_id: format!("user-{id}"),
        company_name: company_name.to_string(),
        logo_url: None,
        bio: Some("Sustainable fabrics and organic cotton.".to_string()),
        website: None,
        abn: None,
        capabilities: vec![
            SupplierCapability::FabricSupplier,
            SupplierCapability::FullProduction,
        ],
        fabric_types: vec!["Organic Cotton".to_string()],
        moq_min: Some(100),
        moq_max: Some(10_000),
        pricing_range: Some(PricingRange::Mid),
        regions_served: vec!["AU".to_string(), "International".to_string()],
        tags: tags.to_vec(),
        certifications: vec!["GOTS".to_string()],
        created_date: at,
        updated_date: at,
    })
}

pub(crate) fn expert(id: &str, name: &str, skills: &[&str], tags: &[Tag]) -> Profile {
    let at = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    Profile::Expert(ExpertProfile {
        id: id.to_string(),
        user_id: format!("user-{id}"),
        name: name.to_string(),
        photo_url: None,
        bio: Some("Pattern maker with 15 years in luxury fashion.".to_string()),
        website: None,
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        day_rate_min: Some(500),
        day_rate_max: Some(800),
        hourly_rate_min: None,
        hourly_rate_max: None,
        regions_served: vec!["AU".to_string()],
        tags: tags.to_vec(),
        certifications: vec![],
        created_date: at,
        updated_date: at,
    })
}

pub(crate) fn brand(id: &str, company_name: &str, categories: &[ProfileCategory]) -> Profile {
    let at = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    Profile::Brand(BrandProfile {
        id: id.to_string(),
        user_id: format!("user-{id}"),
        company_name: company_name.to_string(),
        logo_url: None,
        bio: Some("Contemporary streetwear label based in Sydney.".to_string()),
        website: None,
        abn: None,
        locations: vec!["AU".to_string()],
        categories: categories.to_vec(),
        company_size: CompanySize::Medium,
        social_links: SocialLinks::default(),
        created_date: at,
        updated_date: at,
    })
}

pub(crate) fn mixed_directory() -> Vec<Profile> {
    vec![
        supplier(
            "1",
            "Melbourne Textile Co.",
            &[Tag::Sustainable, Tag::EthicalCertified, Tag::LowMoq],
        ),
        brand(
            "2",
            "Sydney Fashion Brands",
            &[ProfileCategory::Streetwear, ProfileCategory::Rtw],
        ),
        expert(
            "3",
            "Sarah Chen",
            &["Pattern Making", "Technical Development", "Grading"],
            &[Tag::FastTurnaround, Tag::CustomDesign],
        ),
        supplier(
            "4",
            "Brisbane Cut & Sew",
            &[Tag::LowMoq, Tag::FastTurnaround, Tag::FullPackage],
        ),
        expert(
            "5",
            "Michael Torres",
            &["Product Development", "Supply Chain"],
            &[Tag::Sustainable],
        ),
    ]
}
