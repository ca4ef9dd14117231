use std::fmt;

/// One anchorable region of the page. The variant order is the page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Services,
    Pricing,
    Domain,
    About,
}

// Scanned top-to-bottom by the scroll observer, so the order must match the markup.
pub const SECTIONS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::Services,
    SectionId::Pricing,
    SectionId::Domain,
    SectionId::About,
];

impl SectionId {
    /// DOM id of the `<section>` element rendered for this entry.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Pricing => "pricing",
            SectionId::Domain => "domain",
            SectionId::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Главная",
            SectionId::Services => "Услуги",
            SectionId::Pricing => "Цены",
            SectionId::Domain => "Домены",
            SectionId::About => "Обо мне",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
