//! Top navigation bar of the documentation site.

use sitenav_model::NavItem;

/// Ordered top navigation entries.
#[must_use]
pub fn nav() -> Vec<NavItem> {
    vec![
        NavItem::group(
            "Documentazione",
            "^/(guide|style-guide|cookbook|examples)/",
            vec![
                NavItem::link("Guida", "/guide/introduction"),
                NavItem::link("Tutorial", "/tutorial/"),
                NavItem::link("Esempi", "/examples/"),
                NavItem::link("Quick Start", "/guide/quick-start"),
                NavItem::link("Glossario", "/glossary/"),
                NavItem::link("Error Reference", "/error-reference/"),
                NavItem::link("Vue 2 Docs", "https://v2.vuejs.org"),
                NavItem::link("Migrare da Vue 2", "https://v3-migration.vuejs.org/"),
            ],
        ),
        NavItem::link_matching("API", "/api/", "^/api/"),
        NavItem::link("Playground", "https://play.vuejs.org"),
        NavItem::group(
            "Ecosistema",
            "^/ecosystem/",
            vec![
                NavItem::category(
                    "Risorse",
                    vec![
                        NavItem::link("Partner", "/partners/"),
                        NavItem::link("Temi", "/ecosystem/themes"),
                        NavItem::link("UI Components", "https://ui-libs.vercel.app/"),
                        NavItem::link("Plugins Collection", "https://www.vue-plugins.org/"),
                        NavItem::link(
                            "Certificazioni",
                            "https://certificates.dev/vuejs/?ref=vuejs-nav",
                        ),
                        NavItem::link("Offerte di Lavoro", "https://vuejobs.com/?ref=vuejs"),
                        NavItem::link("T-Shirt Shop", "https://vue.threadless.com/"),
                    ],
                ),
                NavItem::category(
                    "Librerie Ufficiali",
                    vec![
                        NavItem::link("Vue Router", "https://router.vuejs.org/"),
                        NavItem::link("Pinia", "https://pinia.vuejs.org/"),
                        NavItem::link("Tooling Guide", "/guide/scaling-up/tooling.html"),
                    ],
                ),
                NavItem::category(
                    "Video-corsi",
                    vec![
                        NavItem::link("Vue Mastery", "https://www.vuemastery.com/courses/"),
                        NavItem::link(
                            "Vue School",
                            "https://vueschool.io/?friend=vuejs&utm_source=Vuejs.org&utm_medium=Link&utm_content=Navbar%20Dropdown",
                        ),
                    ],
                ),
                NavItem::category(
                    "Aiuto",
                    vec![
                        NavItem::link("Chat Discord", "https://discord.com/invite/HBherRA"),
                        NavItem::link(
                            "Discussioni GitHub",
                            "https://github.com/vuejs/core/discussions",
                        ),
                        NavItem::link("Comunità degli Sviluppatori", "https://dev.to/t/vue"),
                    ],
                ),
                NavItem::category(
                    "Notizie",
                    vec![
                        NavItem::link("Blog", "https://blog.vuejs.org/"),
                        NavItem::link("Twitter", "https://x.com/vuejs"),
                        NavItem::link("Eventi", "https://events.vuejs.org/"),
                        NavItem::link("Newsletters", "/ecosystem/newsletters"),
                    ],
                ),
            ],
        ),
        NavItem::group(
            "About",
            "^/about/",
            vec![
                NavItem::link("FAQ", "/about/faq"),
                NavItem::link("Team", "/about/team"),
                NavItem::link("Releases", "/about/releases"),
                NavItem::link("Guida della Comunità", "/about/community-guide"),
                NavItem::link("Codice di condotta", "/about/coc"),
                NavItem::link("Privacy Policy", "/about/privacy"),
                NavItem::link(
                    "Il Documentario",
                    "https://www.youtube.com/watch?v=OrxmtDw4pVI",
                ),
            ],
        ),
        NavItem::link("Sponsor", "/sponsor/"),
        NavItem::link_matching("Partners", "/partners/", "^/partners/"),
    ]
}
