pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Applications web sur mesure",
        description: "Sites vitrines, plateformes, back-offices, dashboards, réservation, etc.",
        points: &["UI/UX moderne", "Développement React / API", "Déploiement"],
    },
    Service {
        title: "Création de sites professionnels",
        description: "Un site rapide, responsive et optimisé SEO pour convertir vos visiteurs.",
        points: &["Design premium", "Performance & SEO", "Maintenance possible"],
    },
    Service {
        title: "Solutions Office & Windows",
        description: "Installation, configuration et optimisation de votre poste de travail.",
        points: &[
            "Office (install/config)",
            "Activation Windows",
            "Mises à jour & optimisation",
        ],
    },
    Service {
        title: "Design graphique",
        description: "Identité visuelle et supports de communication adaptés à votre marque.",
        points: &["Logo", "Flyers / affiches", "Signature e-mail / carte de visite"],
    },
    Service {
        title: "Sécurité & bonnes pratiques",
        description: "On vous aide à réduire les risques et à protéger vos données.",
        points: &["Sauvegardes", "Durcissement", "Conseils & accompagnement"],
    },
    Service {
        title: "Pack entreprise",
        description: "Un pack complet pour démarrer : site + identité + outils de travail.",
        points: &["Site + email pro", "Logo + flyers", "IT & configuration"],
    },
];

pub struct ProcessStep {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Définir le besoin",
        detail: "Objectifs, cible, fonctionnalités, délais.",
    },
    ProcessStep {
        title: "Design & maquettes",
        detail: "UI moderne, parcours clair, validation.",
    },
    ProcessStep {
        title: "Développement",
        detail: "Front + API, intégrations, performance.",
    },
    ProcessStep {
        title: "Livraison",
        detail: "Mise en ligne, support & évolutions.",
    },
];

pub struct PortfolioEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

const PORTFOLIO_TAGS: &[&str] = &["React", "Tailwind", "API"];

pub const PORTFOLIO: &[PortfolioEntry] = &[
    PortfolioEntry {
        title: "application de gestion de tickets",
        description: "Gestion des incidents IT de l'entreprise",
        image: "/static/images/helpdesk.png",
        tags: PORTFOLIO_TAGS,
    },
    PortfolioEntry {
        title: "Octobre Rose",
        description: "Application de caravane médicale",
        image: "/static/images/octobrerose.png",
        tags: PORTFOLIO_TAGS,
    },
];
