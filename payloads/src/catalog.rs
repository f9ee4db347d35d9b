//! The static service catalog.
//!
//! The catalog is an immutable value built once and handed to whoever needs
//! it (the reservation form, category listing, service detail page and the
//! api). Nothing here is global or mutable.

use serde::Serialize;

use crate::responses;

/// Shown on a service detail page when a service has no description yet.
pub const DESCRIPTION_FALLBACK: &str = "Popis brzy doplníme";

/// Title used for a category key that is not in the catalog.
pub const UNKNOWN_CATEGORY_TITLE: &str = "Služby";

/// Category preselected on the reservation form when none is given.
pub const DEFAULT_CATEGORY: &str = "sport";

/// A bookable offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    description: Option<&'static str>,
}

impl ServiceCatalogEntry {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description.unwrap_or(DESCRIPTION_FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub services: &'static [ServiceCatalogEntry],
}

impl ServiceCategory {
    pub fn service(&self, service_id: &str) -> Option<&ServiceCatalogEntry> {
        self.services.iter().find(|s| s.id == service_id)
    }
}

/// Mapping from category key to its bookable services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCatalog {
    categories: &'static [ServiceCategory],
}

impl ServiceCatalog {
    pub const fn new(categories: &'static [ServiceCategory]) -> Self {
        Self { categories }
    }

    /// The venue's offering: sport, entertainment and performance.
    pub const fn standard() -> Self {
        Self::new(STANDARD_CATEGORIES)
    }

    /// All categories in display order.
    pub fn categories(&self) -> &'static [ServiceCategory] {
        self.categories
    }

    pub fn category(&self, key: &str) -> Option<&'static ServiceCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn lookup(
        &self,
        category: &str,
        service: &str,
    ) -> Option<&'static ServiceCatalogEntry> {
        self.category(category)?
            .services
            .iter()
            .find(|s| s.id == service)
    }

    pub fn contains(&self, category: &str, service: &str) -> bool {
        self.lookup(category, service).is_some()
    }

    pub fn title_for(&self, category: &str) -> &'static str {
        self.category(category)
            .map(|c| c.title)
            .unwrap_or(UNKNOWN_CATEGORY_TITLE)
    }

    /// Description of a service in any category.
    pub fn description_for(&self, service: &str) -> &'static str {
        self.categories
            .iter()
            .flat_map(|c| c.services.iter())
            .find(|s| s.id == service)
            .map(|s| s.description())
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Owned representation sent over the wire by the api.
    pub fn to_response(&self) -> Vec<responses::CatalogCategory> {
        self.categories
            .iter()
            .map(|c| responses::CatalogCategory {
                key: c.key.to_string(),
                title: c.title.to_string(),
                services: c
                    .services
                    .iter()
                    .map(|s| responses::CatalogService {
                        id: s.id.to_string(),
                        name: s.name.to_string(),
                        description: s.description().to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        key: "sport",
        title: "Sportovní aktivity",
        services: &[
            ServiceCatalogEntry::new(
                "parkour",
                "Parkour",
                Some(
                    "Naučte se základy parkouru pod vedením zkušených \
                     instruktorů. Vhodné pro začátečníky i pokročilé.",
                ),
            ),
            ServiceCatalogEntry::new(
                "trampoliny",
                "Trampolíny",
                Some(
                    "Skákání na profesionálních trampolínách pro všechny \
                     věkové kategorie.",
                ),
            ),
            ServiceCatalogEntry::new(
                "akrobacie",
                "Akrobacie",
                Some(
                    "Základy akrobacie, salt a přemetů v bezpečném prostředí.",
                ),
            ),
            ServiceCatalogEntry::new(
                "gymnastika",
                "Gymnastika",
                Some(
                    "Gymnastická průprava a trénink pod vedením \
                     kvalifikovaných trenérů.",
                ),
            ),
        ],
    },
    ServiceCategory {
        key: "zabava",
        title: "Zábava & Events",
        services: &[
            ServiceCatalogEntry::new(
                "volny-vstup",
                "Volný vstup",
                Some(
                    "Volný vstup do našeho areálu s možností využití všech \
                     dostupných aktivit.",
                ),
            ),
            ServiceCatalogEntry::new(
                "narozeniny",
                "Narozeninová oslava",
                Some(
                    "Uspořádejte nezapomenutelnou narozeninovou oslavu plnou \
                     zábavy a pohybu.",
                ),
            ),
            ServiceCatalogEntry::new(
                "teambuilding",
                "Teambuilding",
                Some("Firemní akce a teambuilding s různými aktivitami na míru."),
            ),
            ServiceCatalogEntry::new(
                "special",
                "Speciální akce",
                Some("Speciální akce a události pro veřejnost."),
            ),
        ],
    },
    ServiceCategory {
        key: "performance",
        title: "Performance",
        services: &[
            ServiceCatalogEntry::new(
                "vystoupeni",
                "Vystoupení",
                Some("Profesionální vystoupení našeho týmu na různých akcích."),
            ),
            ServiceCatalogEntry::new(
                "shows",
                "Shows",
                Some("Ukázky parkouru, akrobacie a dalších dovedností."),
            ),
            ServiceCatalogEntry::new(
                "reklama",
                "Reklama",
                Some("Spolupráce na reklamních projektech a natáčení."),
            ),
            ServiceCatalogEntry::new(
                "spoluprace",
                "Spolupráce",
                Some("Možnosti dlouhodobé spolupráce a partnerství."),
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_categories_of_four() {
        let catalog = ServiceCatalog::standard();
        let keys: Vec<_> = catalog.categories().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["sport", "zabava", "performance"]);
        assert!(catalog.categories().iter().all(|c| c.services.len() == 4));
    }

    #[test]
    fn lookup_finds_service_within_its_category_only() {
        let catalog = ServiceCatalog::standard();
        let entry = catalog.lookup("sport", "parkour").unwrap();
        assert_eq!(entry.name, "Parkour");
        assert!(catalog.lookup("zabava", "parkour").is_none());
    }

    #[test]
    fn unknown_category_is_not_found() {
        let catalog = ServiceCatalog::standard();
        assert!(catalog.category("neexistuje").is_none());
        assert!(catalog.lookup("neexistuje", "parkour").is_none());
        assert!(!catalog.contains("neexistuje", "parkour"));
        assert_eq!(catalog.title_for("neexistuje"), UNKNOWN_CATEGORY_TITLE);
    }

    #[test]
    fn description_falls_back_when_missing() {
        const CUSTOM: &[ServiceCategory] = &[ServiceCategory {
            key: "sport",
            title: "Sport",
            services: &[ServiceCatalogEntry::new("box", "Box", None)],
        }];
        let catalog = ServiceCatalog::new(CUSTOM);
        assert_eq!(catalog.description_for("box"), DESCRIPTION_FALLBACK);
        assert_eq!(catalog.description_for("unknown"), DESCRIPTION_FALLBACK);
        assert_ne!(
            ServiceCatalog::standard().description_for("parkour"),
            DESCRIPTION_FALLBACK
        );
    }
}
