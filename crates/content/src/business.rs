pub struct ContactDetails {
    pub phone_display: &'static str,
    pub phone_link: &'static str,
    pub email: &'static str,
    pub city: &'static str,
    pub whatsapp_link: &'static str,
}

impl ContactDetails {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_link)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const CONTACT: ContactDetails = ContactDetails {
    phone_display: "+241 74 244 291",
    phone_link: "+24174244291",
    email: "nebjtech@gmail.com",
    city: "Libreville, Gabon",
    whatsapp_link: "https://wa.me/24174244291",
};

pub const BRAND: &str = "NEBJ Tech";
pub const TAGLINE: &str = "Digital Solutions";

/// In-page anchor shown in the header navigation.
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV: &[NavItem] = &[
    NavItem {
        id: "services",
        label: "Services",
    },
    NavItem {
        id: "about",
        label: "À propos",
    },
    NavItem {
        id: "process",
        label: "Process",
    },
    NavItem {
        id: "realisations",
        label: "Réalisations",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "⚡",
        label: "Rapide",
    },
    Stat {
        value: "🎯",
        label: "Sur-mesure",
    },
    Stat {
        value: "✅",
        label: "Pro",
    },
];

pub const HIGHLIGHTS: &[&str] = &[
    "Entreprise locale",
    "Qualité premium",
    "Délais clairs",
    "Support après livraison",
];
