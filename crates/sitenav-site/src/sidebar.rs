//! Per-section sidebar trees of the documentation site.

use sitenav_model::{NavItem, Sidebar, SidebarGroup};

/// Sidebar map: one ordered group list per documentation area.
#[must_use]
pub fn sidebar() -> Sidebar {
    let mut sidebar = Sidebar::new();
    sidebar.insert("/guide/", guide());
    sidebar.insert("/api/", api());
    sidebar.insert("/examples/", examples());
    sidebar.insert("/style-guide/", style_guide());
    sidebar
}

fn guide() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new(
            "Guida introduttiva",
            vec![
                NavItem::link("Panoramica", "/guide/introduction"),
                NavItem::link("Avvio rapido", "/guide/quick-start"),
            ],
        ),
        SidebarGroup::new(
            "Gli Elementi Essenziali",
            vec![
                NavItem::link("Creare un'applicazione", "/guide/essentials/application"),
                NavItem::link(
                    "La Sintassi del Template",
                    "/guide/essentials/template-syntax",
                ),
                NavItem::link(
                    "Le basi della Reattività",
                    "/guide/essentials/reactivity-fundamentals",
                ),
                NavItem::link("Le Computed Properties", "/guide/essentials/computed"),
                NavItem::link(
                    "Binding per Classi e Stili CSS",
                    "/guide/essentials/class-and-style",
                ),
                NavItem::link("Rendering Condizionale", "/guide/essentials/conditional"),
                NavItem::link("Il Rendering delle Liste", "/guide/essentials/list"),
                NavItem::link(
                    "La Gestione degli Eventi",
                    "/guide/essentials/event-handling",
                ),
                NavItem::link("Binding per gli Input dei Form", "/guide/essentials/forms"),
                NavItem::link("Gli Hook del Ciclo di Vita", "/guide/essentials/lifecycle"),
                NavItem::link("I Watcher", "/guide/essentials/watchers"),
                NavItem::link("I Ref del Template", "/guide/essentials/template-refs"),
                NavItem::link(
                    "Nozioni base sui Componenti",
                    "/guide/essentials/component-basics",
                ),
            ],
        ),
        SidebarGroup::new(
            "I Componenti nel dettaglio",
            vec![
                NavItem::link("La Registrazione", "/guide/components/registration"),
                NavItem::link("Le Props", "/guide/components/props"),
                NavItem::link("Gli Eventi", "/guide/components/events"),
                NavItem::link("Il v-model nei componenti", "/guide/components/v-model"),
                NavItem::link(
                    "Gli Attributi Trasferibili (Fallthrough)",
                    "/guide/components/attrs",
                ),
                NavItem::link("Gli Slot", "/guide/components/slots"),
                NavItem::link("Provide / inject", "/guide/components/provide-inject"),
                NavItem::link("I Componenti Asincroni", "/guide/components/async"),
            ],
        ),
        SidebarGroup::new(
            "Il Riutilizzo del Codice",
            vec![
                NavItem::link("I Composables", "/guide/reusability/composables"),
                NavItem::link(
                    "Le Direttive Personalizzate",
                    "/guide/reusability/custom-directives",
                ),
                NavItem::link("I Plugin", "/guide/reusability/plugins"),
            ],
        ),
        SidebarGroup::new(
            "I Componenti nativi",
            vec![
                NavItem::link("Transition", "/guide/built-ins/transition"),
                NavItem::link("TransitionGroup", "/guide/built-ins/transition-group"),
                NavItem::link("KeepAlive", "/guide/built-ins/keep-alive"),
                NavItem::link("Teleport", "/guide/built-ins/teleport"),
                NavItem::link("Suspense", "/guide/built-ins/suspense"),
            ],
        ),
        SidebarGroup::new(
            "Scalabilità per progetti complessi",
            vec![
                NavItem::link("I Componenti Single-File", "/guide/scaling-up/sfc"),
                NavItem::link(
                    "Gli Strumenti per lo sviluppo",
                    "/guide/scaling-up/tooling",
                ),
                NavItem::link("Il Routing", "/guide/scaling-up/routing"),
                NavItem::link(
                    "La Gestione dello Stato",
                    "/guide/scaling-up/state-management",
                ),
                NavItem::link("I Test nel dettaglio", "/guide/scaling-up/testing"),
                NavItem::link("Il Rendering Server-Side (SSR)", "/guide/scaling-up/ssr"),
            ],
        ),
        SidebarGroup::new(
            "Best Practices",
            vec![
                NavItem::link(
                    "Rilascio in Produzione",
                    "/guide/best-practices/production-deployment",
                ),
                NavItem::link("Performance", "/guide/best-practices/performance"),
                NavItem::link("Accessibilità Web", "/guide/best-practices/accessibility"),
                NavItem::link("Sicurezza", "/guide/best-practices/security"),
            ],
        ),
        SidebarGroup::new(
            "TypeScript",
            vec![
                NavItem::link("Panoramica", "/guide/typescript/overview"),
                NavItem::link(
                    "TS con Composition API",
                    "/guide/typescript/composition-api",
                ),
                NavItem::link("TS con Options API", "/guide/typescript/options-api"),
            ],
        ),
        SidebarGroup::new(
            "Argomenti Extra",
            vec![
                NavItem::link(
                    "Modi di utilizzare Vue",
                    "/guide/extras/ways-of-using-vue",
                ),
                NavItem::link(
                    "FAQ sulla Composition API",
                    "/guide/extras/composition-api-faq",
                ),
                NavItem::link(
                    "La Reattività in dettaglio",
                    "/guide/extras/reactivity-in-depth",
                ),
                NavItem::link(
                    "Il Meccanismo di Rendering",
                    "/guide/extras/rendering-mechanism",
                ),
                NavItem::link(
                    "Le Render Function e JSX",
                    "/guide/extras/render-function",
                ),
                NavItem::link(
                    "Vue e i Web Components",
                    "/guide/extras/web-components",
                ),
                NavItem::link("Tecniche di Animazione", "/guide/extras/animation"),
            ],
        ),
    ]
}

fn api() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new(
            "API Globali",
            vec![
                NavItem::link("Applicazione", "/api/application"),
                NavItem::link("Generale", "/api/general"),
            ],
        ),
        SidebarGroup::new(
            "Composition API",
            vec![
                NavItem::link("setup()", "/api/composition-api-setup"),
                NavItem::link("Reactivity: Il Core", "/api/reactivity-core"),
                NavItem::link("Reactivity: Utilità", "/api/reactivity-utilities"),
                NavItem::link("Reactivity: Uso Avanzato", "/api/reactivity-advanced"),
                NavItem::link("Hook del Ciclo di Vita", "/api/composition-api-lifecycle"),
                NavItem::link(
                    "Dependency Injection",
                    "/api/composition-api-dependency-injection",
                ),
                NavItem::link("Helpers", "/api/composition-api-helpers"),
            ],
        ),
        SidebarGroup::new(
            "Options API",
            vec![
                NavItem::link("Options: Lo Stato", "/api/options-state"),
                NavItem::link("Options: Rendering", "/api/options-rendering"),
                NavItem::link("Options: Ciclo di Vita", "/api/options-lifecycle"),
                NavItem::link("Options: Composizione", "/api/options-composition"),
                NavItem::link("Options: Varie", "/api/options-misc"),
                NavItem::link("Istanza del Componente", "/api/component-instance"),
            ],
        ),
        SidebarGroup::new(
            "API Native",
            vec![
                NavItem::link("Direttive", "/api/built-in-directives"),
                NavItem::link("Componenti", "/api/built-in-components"),
                NavItem::link("Elementi Speciali", "/api/built-in-special-elements"),
                NavItem::link("Attributi Speciali", "/api/built-in-special-attributes"),
            ],
        ),
        SidebarGroup::new(
            "Componente Single-File",
            vec![
                NavItem::link("Specifiche della Sintassi", "/api/sfc-spec"),
                NavItem::link("<script setup>", "/api/sfc-script-setup"),
                NavItem::link("Funzionalità CSS", "/api/sfc-css-features"),
            ],
        ),
        SidebarGroup::new(
            "API Avanzate",
            vec![
                NavItem::link("Custom Elements", "/api/custom-elements"),
                NavItem::link("Render Function", "/api/render-function"),
                NavItem::link("Rendering Server Side", "/api/ssr"),
                NavItem::link("Types delle Utility TypeScript", "/api/utility-types"),
                NavItem::link("Renderer Personalizzato", "/api/custom-renderer"),
                NavItem::link("Compile-Time Flags", "/api/compile-time-flags"),
            ],
        ),
    ]
}

fn examples() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new(
            "Base",
            vec![
                NavItem::link("Ciao Mondo", "/examples/#hello-world"),
                NavItem::link(
                    "Gestione dell'Input dell'Utente",
                    "/examples/#handling-input",
                ),
                NavItem::link("Binding di Attributi", "/examples/#attribute-bindings"),
                NavItem::link(
                    "Op. Condizionali e Cicli",
                    "/examples/#conditionals-and-loops",
                ),
                NavItem::link("Binding di Form", "/examples/#form-bindings"),
                NavItem::link("Componente Semplice", "/examples/#simple-component"),
            ],
        ),
        SidebarGroup::new(
            "Utili",
            vec![
                NavItem::link("Editor di Markdown", "/examples/#markdown"),
                NavItem::link("Fetching di Dati", "/examples/#fetching-data"),
                NavItem::link(
                    "Griglia con Ordinamento e Filtri",
                    "/examples/#grid",
                ),
                NavItem::link("Visualizzazione ad Albero", "/examples/#tree"),
                NavItem::link("Grafico SVG", "/examples/#svg"),
                NavItem::link("Modale con Transizioni", "/examples/#modal"),
                NavItem::link("Lista con Transizioni", "/examples/#list-transition"),
            ],
        ),
        // https://eugenkiss.github.io/7guis/
        SidebarGroup::new(
            "7 GUIs",
            vec![
                NavItem::link("Contatore", "/examples/#counter"),
                NavItem::link(
                    "Convertitore di Temperatura",
                    "/examples/#temperature-converter",
                ),
                NavItem::link("Prenotazione Volo", "/examples/#flight-booker"),
                NavItem::link("Timer", "/examples/#timer"),
                NavItem::link("CRUD", "/examples/#crud"),
                NavItem::link("Circle Drawer", "/examples/#circle-drawer"),
                NavItem::link("Celle", "/examples/#cells"),
            ],
        ),
    ]
}

fn style_guide() -> Vec<SidebarGroup> {
    vec![SidebarGroup::new(
        "Style Guide",
        vec![
            NavItem::link("Panoramica", "/style-guide/"),
            NavItem::link("A - Essenziale", "/style-guide/rules-essential"),
            NavItem::link(
                "B - Fortemente Raccomandato",
                "/style-guide/rules-strongly-recommended",
            ),
            NavItem::link("C - Raccomandato", "/style-guide/rules-recommended"),
            NavItem::link(
                "D - Usare con Cautela",
                "/style-guide/rules-use-with-caution",
            ),
        ],
    )]
}
