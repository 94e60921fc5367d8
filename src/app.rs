mod about;
mod accordion;
mod contact;
mod home;
mod lightbox;
mod projects;
mod underline;
mod video;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::build_date,
    content::{self, NAME, WORK_PROJECTS},
};
use about::About;
use home::Home;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // JSON-LD must not be html escaped, so it goes in as inner html
    let person = serde_json::to_string(&content::person()).unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person></script>
                <MetaTags />
            </head>
            <body class="bg-white text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Meta
            name="description"
            content="React Native와 React로 서비스를 만드는 프론트엔드 개발자 포트폴리오"
        />
        <Meta property="og:image" content=WORK_PROJECTS[0].image />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-5xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 bg-white/90 backdrop-blur border-b border-gray-100">
            <nav class="mx-auto max-w-5xl px-4 py-4 flex items-center justify-between">
                <a href="#" class="font-bold text-lg">
                    {NAME}
                </a>
                <div class="flex gap-6 text-sm font-medium text-gray-600">
                    <a href="#about" class="hover:text-gray-900">
                        "About"
                    </a>
                    <a href="#projects" class="hover:text-gray-900">
                        "Projects"
                    </a>
                    <a href="#contact" class="hover:text-gray-900">
                        "Contact"
                    </a>
                </div>
            </nav>
        </header>
    }
}

/// The whole site is one scrolling page.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="프론트엔드 개발자" />
        <Home />
        <About />
        <Projects />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let date = build_date();
    let year = date.get(..4).unwrap_or(date);
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            <p>{format!("© {year} {NAME}")}</p>
            <p class="mt-1">"Last updated " {date}</p>
        </footer>
    }
}
