//! Seed records for every catalog category.

use super::Category;

/// Raw catalog record before URL resolution.
pub(super) struct Seed {
    /// File name inside the category folder.
    pub file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: Option<&'static str>,
    pub designer: Option<&'static str>,
    pub price: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub(super) fn seeds(category: Category) -> &'static [Seed] {
    match category {
        Category::Venues => VENUES,
        Category::Dresses => DRESSES,
        Category::Hairstyles => HAIRSTYLES,
        Category::Cakes => CAKES,
    }
}

const VENUES: &[Seed] = &[
    Seed {
        file: "eventsbomb_09464_A_very_elegant_and_luxurious.png",
        title: "Elegant Luxurious Venue",
        description: "A very elegant and luxurious wedding venue",
        location: Some("Austin, TX"),
        designer: None,
        price: Some("$$$"),
        tags: &["Elegant", "Luxury", "Indoor"],
    },
    Seed {
        file: "amadeowang99_French_modern_wedding.png",
        title: "French Modern Wedding",
        description: "Beautiful modern venue with French influences",
        location: Some("Paris, France"),
        designer: None,
        price: Some("$$$$"),
        tags: &["Modern", "French", "Elegant"],
    },
    Seed {
        file: "amadeowang99_Luxury_wedding_venue.png",
        title: "Luxury Wedding Venue",
        description: "Opulent venue with luxurious details",
        location: Some("New York, NY"),
        designer: None,
        price: Some("$$$$$"),
        tags: &["Luxury", "Opulent", "Grand"],
    },
    Seed {
        file: "amadeowang99_Rustic_wedding_venue.png",
        title: "Rustic Wedding Venue",
        description: "Charming rustic venue with natural elements",
        location: Some("Montana"),
        designer: None,
        price: Some("$$"),
        tags: &["Rustic", "Barn", "Natural"],
    },
    Seed {
        file: "amadeowang99_Modern_wedding_venue.png",
        title: "Modern Wedding Venue",
        description: "Contemporary venue with sleek design",
        location: Some("Los Angeles, CA"),
        designer: None,
        price: Some("$$$"),
        tags: &["Modern", "Contemporary", "Urban"],
    },
];

const DRESSES: &[Seed] = &[
    Seed {
        file: "alexb_79_Classic_Wedding_Dress.png",
        title: "Classic Wedding Dress",
        description: "Timeless elegant wedding gown",
        location: None,
        designer: Some("Classic Bridal"),
        price: Some("$$$"),
        tags: &["Classic", "Elegant", "Traditional"],
    },
    Seed {
        file: "amadeowang99_Modern_Wedding_Dress.png",
        title: "Modern Wedding Dress",
        description: "Contemporary sleek wedding gown",
        location: None,
        designer: Some("Modern Bride"),
        price: Some("$$$"),
        tags: &["Modern", "Sleek", "Minimalist"],
    },
    Seed {
        file: "amadeowang99_Luxury_Wedding_Dress.png",
        title: "Luxury Wedding Dress",
        description: "Opulent detailed wedding gown",
        location: None,
        designer: Some("Luxury Couture"),
        price: Some("$$$$"),
        tags: &["Luxury", "Opulent", "Detailed"],
    },
    Seed {
        file: "amadeowang99_Rustic_Wedding_Dress.png",
        title: "Rustic Wedding Dress",
        description: "Natural bohemian wedding gown",
        location: None,
        designer: Some("Rustic Bride"),
        price: Some("$$"),
        tags: &["Rustic", "Bohemian", "Natural"],
    },
    Seed {
        file: "amadeowang99_Bohemian_Wedding_Dress.png",
        title: "Bohemian Wedding Dress",
        description: "Free-spirited boho wedding gown",
        location: None,
        designer: Some("Boho Bridal"),
        price: Some("$$"),
        tags: &["Bohemian", "Boho", "Flowy"],
    },
];

const HAIRSTYLES: &[Seed] = &[
    Seed {
        file: "alexb_79_Classic_Wedding_Hairstyle.png",
        title: "Classic Wedding Hairstyle",
        description: "Timeless elegant updo",
        location: None,
        designer: None,
        price: None,
        tags: &["Classic", "Elegant", "Updo"],
    },
    Seed {
        file: "amadeowang99_Modern_Wedding_Hairstyle.png",
        title: "Modern Wedding Hairstyle",
        description: "Contemporary sleek style",
        location: None,
        designer: None,
        price: None,
        tags: &["Modern", "Sleek", "Contemporary"],
    },
    Seed {
        file: "amadeowang99_Luxury_Wedding_Hairstyle.png",
        title: "Luxury Wedding Hairstyle",
        description: "Glamorous detailed style",
        location: None,
        designer: None,
        price: None,
        tags: &["Luxury", "Glamorous", "Detailed"],
    },
    Seed {
        file: "amadeowang99_Rustic_Wedding_Hairstyle.png",
        title: "Rustic Wedding Hairstyle",
        description: "Natural bohemian style",
        location: None,
        designer: None,
        price: None,
        tags: &["Rustic", "Bohemian", "Natural"],
    },
    Seed {
        file: "amadeowang99_Bohemian_Wedding_Hairstyle.png",
        title: "Bohemian Wedding Hairstyle",
        description: "Free-spirited boho style",
        location: None,
        designer: None,
        price: None,
        tags: &["Bohemian", "Boho", "Flowy"],
    },
];

const CAKES: &[Seed] = &[
    Seed {
        file: "alexb_79_Classic_Wedding_Cake.png",
        title: "Classic Wedding Cake",
        description: "Timeless elegant tiered cake",
        location: None,
        designer: None,
        price: Some("$$$"),
        tags: &["Classic", "Elegant", "Traditional"],
    },
    Seed {
        file: "amadeowang99_Modern_Wedding_Cake.png",
        title: "Modern Wedding Cake",
        description: "Contemporary minimalist cake",
        location: None,
        designer: None,
        price: Some("$$$"),
        tags: &["Modern", "Minimalist", "Geometric"],
    },
    Seed {
        file: "amadeowang99_Luxury_Wedding_Cake.png",
        title: "Luxury Wedding Cake",
        description: "Opulent detailed multi-tier cake",
        location: None,
        designer: None,
        price: Some("$$$$"),
        tags: &["Luxury", "Opulent", "Detailed"],
    },
    Seed {
        file: "amadeowang99_Rustic_Wedding_Cake.png",
        title: "Rustic Wedding Cake",
        description: "Natural rustic naked cake",
        location: None,
        designer: None,
        price: Some("$$"),
        tags: &["Rustic", "Natural", "Naked Cake"],
    },
    Seed {
        file: "amadeowang99_Bohemian_Wedding_Cake.png",
        title: "Bohemian Wedding Cake",
        description: "Artistic boho-inspired cake",
        location: None,
        designer: None,
        price: Some("$$"),
        tags: &["Bohemian", "Boho", "Artistic"],
    },
];
