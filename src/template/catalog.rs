use serde::Serialize;

/// Template count used for occasions missing from the catalog.
pub const DEFAULT_TEMPLATE_COUNT: usize = 10;

/// A single occasion a user can pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occasion {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub template_count: usize,
}

/// A group of related occasions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub occasions: Vec<Occasion>,
}

/// The occasion picklist with per-occasion template counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        fn occ(
            id: &'static str,
            label: &'static str,
            emoji: &'static str,
            template_count: usize,
        ) -> Occasion {
            Occasion {
                id,
                label,
                emoji,
                template_count,
            }
        }

        let categories = vec![
            Category {
                id: "birthday",
                label: "Birthday",
                icon: "🎂",
                occasions: vec![
                    occ("birthday-friend", "Friend", "👫", 12),
                    occ("birthday-brother", "Brother", "👦", 10),
                    occ("birthday-sister", "Sister", "👧", 10),
                    occ("birthday-mother", "Mother", "👩", 12),
                    occ("birthday-father", "Father", "👨", 10),
                    occ("birthday-wife", "Wife", "💑", 11),
                ],
            },
            Category {
                id: "love",
                label: "Love & Anniversary",
                icon: "❤️",
                occasions: vec![
                    occ("love-valentine", "Valentine's Day", "💕", 12),
                    occ("love-anniversary", "Anniversary", "💍", 10),
                    occ("love-proposal", "Proposal", "💐", 10),
                ],
            },
            Category {
                id: "festivals",
                label: "Festivals",
                icon: "🎉",
                occasions: vec![
                    occ("festival-diwali", "Diwali", "🪔", 15),
                    occ("festival-holi", "Holi", "🎨", 12),
                    occ("festival-christmas", "Christmas", "🎄", 12),
                    occ("festival-eid", "Eid", "🌙", 10),
                    occ("festival-sankranti", "Sankranti", "🪁", 10),
                ],
            },
            Category {
                id: "motivation",
                label: "Motivation",
                icon: "💪",
                occasions: vec![
                    occ("motivation-success", "Success", "🏆", 10),
                    occ("motivation-goodmorning", "Good Morning", "🌅", 12),
                    occ("motivation-quotes", "Inspirational", "✨", 10),
                ],
            },
            Category {
                id: "religious",
                label: "Religious",
                icon: "🙏",
                occasions: vec![
                    occ("religious-ganesh", "Ganesh Chaturthi", "🐘", 12),
                    occ("religious-navratri", "Navratri", "🔱", 10),
                    occ("religious-ram-navami", "Ram Navami", "🏹", 10),
                ],
            },
        ];

        Self { categories }
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every occasion across categories, in display order.
    pub fn occasions(&self) -> impl Iterator<Item = &Occasion> {
        self.categories.iter().flat_map(|c| c.occasions.iter())
    }

    /// Look up an occasion by id.
    pub fn occasion(&self, id: &str) -> Option<&Occasion> {
        self.occasions().find(|o| o.id == id)
    }

    /// Configured template count, or [`DEFAULT_TEMPLATE_COUNT`] for unknown ids.
    pub fn template_count(&self, id: &str) -> usize {
        self.occasion(id)
            .map(|o| o.template_count)
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_TEMPLATE_COUNT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/catalog.rs"]
mod tests;
