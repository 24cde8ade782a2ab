//! Built-in HIV combination prevention content

use super::{Category, Content, InfoPoint, InfoSheet, ItemDef};

/// The ten interventions and three prevention strategies the game ships with
pub fn builtin() -> Content {
    Content {
        title: "HIV Combination Prevention Game".to_string(),
        instructions: "Categorize each intervention into the correct prevention strategy."
            .to_string(),
        pool_heading: "Available Interventions".to_string(),
        categories: vec![
            Category::new("medical", "Medical Interventions"),
            Category::new("structural", "Structural Interventions"),
            Category::new("social", "Social Interventions"),
        ],
        items: vec![
            ItemDef::new("vmc", "Voluntary medical male circumcision", "medical"),
            ItemDef::new("prep", "PrEP", "medical"),
            ItemDef::new("pep", "PEP", "medical"),
            ItemDef::new("art", "ART as Treatment", "medical"),
            ItemDef::new("harm", "Harm Reduction", "medical"),
            ItemDef::new("laws", "Change of laws", "structural"),
            ItemDef::new("economic", "Economic Opportunities", "structural"),
            ItemDef::new("corruption", "Deal with corruption", "structural"),
            ItemDef::new("awareness", "Awareness Campaigns", "social"),
            ItemDef::new("support", "Support Groups", "social"),
        ],
        info: Some(info_sheet()),
    }
}

fn info_sheet() -> InfoSheet {
    InfoSheet {
        heading: "HIV Combination Prevention".to_string(),
        intro: "HIV combination prevention refers to the use of multiple strategies to prevent \
                HIV transmission. These strategies fall into three main categories:"
            .to_string(),
        points: vec![
            InfoPoint {
                label: "Medical Interventions".to_string(),
                text: "These include biomedical approaches such as PrEP, PEP, ART, and \
                       voluntary medical male circumcision."
                    .to_string(),
            },
            InfoPoint {
                label: "Structural Interventions".to_string(),
                text: "These address social, economic, and political factors that influence \
                       HIV risk and vulnerability."
                    .to_string(),
            },
            InfoPoint {
                label: "Social Interventions".to_string(),
                text: "These focus on changing individual and community behaviors through \
                       education, counseling, and support."
                    .to_string(),
            },
        ],
        closing: "By combining these approaches, HIV combination prevention aims to provide a \
                  comprehensive and effective strategy to reduce HIV transmission."
            .to_string(),
    }
}
