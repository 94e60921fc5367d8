use leptos::{either::*, prelude::*};

use super::{
    contact::ContactSection,
    lightbox::{Lightbox, ZoomableImage},
    underline::UnderlineText,
    video::VideoPlayer,
};
use crate::{
    config::resolve_public_url,
    content::{
        LearningProject, SideProject, TechIcon, TechSkill, WorkProject, LEARNING_PROJECTS,
        SIDE_PROJECTS, WORK_PROJECTS,
    },
    widgets::LightboxState,
};

const GOOGLE_PLAY_ICON: &str = "M3,20.5V3.5C3,2.91 3.34,2.39 3.84,2.15L13.69,12L3.84,21.85C3.34,21.6 3,21.09 3,20.5M16.81,15.12L6.05,21.34L14.54,12.85L16.81,15.12M20.16,10.81C20.5,11.08 20.75,11.5 20.75,12C20.75,12.5 20.5,12.92 20.16,13.19L14.54,17.15L16.81,19.42L20.16,15.19C21.16,14.5 21.75,13.31 21.75,12C21.75,10.69 21.16,9.5 20.16,8.81L16.81,4.58L14.54,6.85L20.16,10.81M6.05,2.66L16.81,8.88L14.54,11.15L6.05,2.66Z";
const APP_STORE_ICON: &str = "M16.37 1.43c0 1.14-.42 2.2-1.25 3.05-.9.92-1.98 1.45-3.15 1.36-.15-1.1.42-2.25 1.22-3.07.9-.93 2.2-1.53 3.18-1.34zM20.5 17.2c-.55 1.27-.82 1.84-1.53 2.96-1 1.57-2.4 3.52-4.14 3.54-1.55.01-1.95-1.01-4.05-1-2.1.01-2.54 1.02-4.09 1-1.74-.02-3.07-1.78-4.07-3.35C-.18 15.96-.47 10.8 1.3 8.08c1.25-1.93 3.23-3.06 5.08-3.06 1.89 0 3.08 1.04 4.64 1.04 1.52 0 2.44-1.04 4.63-1.04 1.65 0 3.4.9 4.64 2.45-4.08 2.24-3.42 8.06.21 9.73z";

const SUBHEADING: &str = "text-sm font-semibold text-gray-500 uppercase tracking-wider mb-3";

/// All project groups plus the contact block. Owns the lightbox used by the
/// metrics screenshots.
#[component]
pub fn Projects() -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::default());
    provide_context(lightbox);

    view! {
        <div class="animate-slide-up">
            <Lightbox state=lightbox />
            <div class="section pt-0" id="projects">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-3 text-center">
                    <UnderlineText text="실무 프로젝트" color="primary" />
                </h2>
                <p class="text-center text-gray-600 mb-12">
                    "현재 48,000명이 사용하는 서비스를 개발하고 있습니다"
                </p>
                <div class="space-y-8">
                    {WORK_PROJECTS.iter().map(|p| view! { <WorkCard project=*p /> }).collect_view()}
                </div>
            </div>
            <div class="section border-t-2 border-gray-200 pt-16">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-3 text-center">
                    <UnderlineText text="사이드 프로젝트" color="accent" />
                </h2>
                <p class="text-gray-600 mb-12 text-base text-center">
                    "실제 서비스 출시를 목표로 출시 완료한 프로젝트입니다"
                </p>
                <div class="space-y-8">
                    {SIDE_PROJECTS.iter().map(|p| view! { <SideCard project=*p /> }).collect_view()}
                </div>
            </div>
            <div class="section border-t-2 border-gray-200 pt-16">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-3 text-center">
                    <UnderlineText text="개인 학습 프로젝트" color="secondary" />
                </h2>
                <p class="text-gray-600 mb-12 text-base text-center">
                    "프론트엔드 개발 학습 과정에서 진행한 프로젝트입니다"
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {LEARNING_PROJECTS
                        .iter()
                        .map(|p| view! { <LearningCard project=*p /> })
                        .collect_view()}
                </div>
            </div>
            <ContactSection />
        </div>
    }
}

#[component]
fn WorkCard(project: WorkProject) -> impl IntoView {
    let metrics = (!project.metrics_images.is_empty()).then(|| {
        view! {
            <div class="mt-4">
                <h4 class=SUBHEADING>"지표 스크린샷"</h4>
                <div class="flex flex-col md:flex-row gap-4">
                    {project
                        .metrics_images
                        .iter()
                        .map(|src| {
                            view! {
                                <ZoomableImage
                                    src=resolve_public_url(src)
                                    alt="프로젝트 지표 스크린샷"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <div class="bg-white rounded-2xl shadow-lg border border-gray-100 overflow-hidden hover:shadow-xl transition-all duration-300 p-8 transform hover:-translate-y-1">
            <div class="mb-4">
                <h2 class="text-2xl md:text-3xl font-bold text-gray-900 mb-2">{project.title}</h2>
                <h3 class="text-xl text-gray-600 font-medium">{project.subtitle}</h3>
            </div>
            <div class="mb-4">
                <p class="text-lg text-gray-700 leading-relaxed mb-4">{project.description}</p>
                <Highlights items=project.highlights class="mt-6" />
            </div>
            {metrics}
            <TechStack skills=project.skills />
            <Review text=project.review />
            {project
                .video
                .map(|url| {
                    view! {
                        <div class="mt-6">
                            <h4 class="text-lg font-semibold text-gray-900 mb-3 text-center">
                                "구현 영상"
                            </h4>
                            <div class="overflow-hidden">
                                <VideoPlayer url />
                            </div>
                        </div>
                    }
                })}
            {project
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-minimal inline-flex items-center gap-2 mt-6"
                        >
                            <span>"프로젝트 보기"</span>
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M14 5l7 7m0 0l-7 7m7-7H3"
                                />
                            </svg>
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn SideCard(project: SideProject) -> impl IntoView {
    // store buttons win over the generic link when both exist
    let links = if project.has_store_links() {
        EitherOf3::A(view! {
            <div class="flex flex-wrap gap-3 mt-4">
                {project
                    .ios_link
                    .map(|href| {
                        view! {
                            <StoreButton
                                href
                                label="App Store에서 보기"
                                icon=APP_STORE_ICON
                                class="bg-gray-900 hover:bg-gray-800"
                            />
                        }
                    })}
                {project
                    .android_link
                    .map(|href| {
                        view! {
                            <StoreButton
                                href
                                label="Google Play에서 보기"
                                icon=GOOGLE_PLAY_ICON
                                class="bg-green-600 hover:bg-green-700"
                            />
                        }
                    })}
            </div>
        })
    } else if let Some(href) = project.link {
        EitherOf3::B(view! {
            <div class="mt-4">
                <StoreButton
                    href
                    label="Google Play에서 보기"
                    icon=GOOGLE_PLAY_ICON
                    class="bg-green-600 hover:bg-green-700"
                />
            </div>
        })
    } else {
        EitherOf3::C(())
    };

    view! {
        <div class="bg-gradient-to-r from-blue-50 to-purple-50 rounded-2xl shadow-lg border-2 border-blue-200 overflow-hidden hover:shadow-xl transition-all duration-300 p-8 transform hover:-translate-y-1">
            <div class="mb-4 flex items-start gap-4">
                {(!project.image.is_empty())
                    .then(|| {
                        view! {
                            <img
                                src=resolve_public_url(project.image)
                                alt=project.title
                                class="w-20 h-20 rounded-xl object-cover shadow-md flex-shrink-0"
                            />
                        }
                    })}
                <div class="flex-1">
                    <h3 class="font-bold text-gray-900 mb-2 text-2xl">{project.title}</h3>
                    {(!project.subtitle.is_empty())
                        .then(|| {
                            view! {
                                <p class="text-base text-blue-700 font-semibold mb-2 flex items-center gap-2">
                                    <span class="inline-block w-2 h-2 bg-blue-500 rounded-full animate-pulse"></span>
                                    {project.subtitle}
                                </p>
                            }
                        })}
                </div>
            </div>
            {(!project.description.is_empty())
                .then(|| {
                    view! {
                        <p class="text-lg text-gray-700 leading-relaxed mb-4">
                            {project.description}
                        </p>
                    }
                })}
            <Highlights items=project.highlights class="mt-6 mb-4" />
            <TechStack skills=project.skills rounded=true />
            {(!project.review.is_empty())
                .then(|| view! { <div class="mt-6"><Review text=project.review /></div> })}
            {links}
        </div>
    }
}

#[component]
fn LearningCard(project: LearningProject) -> impl IntoView {
    view! {
        <div class="p-6 border-l-4 border-gray-400 hover:border-blue-500 transition-all duration-300 bg-white hover:shadow-lg rounded-r-lg h-full flex flex-col group transform hover:-translate-y-1">
            <h3 class="font-bold text-gray-900 mb-2 text-xl group-hover:text-blue-600 transition-colors duration-300">
                {project.title}
            </h3>
            <p class="text-sm text-blue-600 font-medium mb-3">{project.description}</p>
            <p class="text-sm text-gray-600 mb-4 font-medium">{project.skills}</p>
            {(!project.review.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-4 p-4 bg-white border-l-2 border-gray-300">
                            <h4 class="text-base font-semibold text-gray-700 mb-2">"역할 및 경험"</h4>
                            <p class="text-base text-gray-700 leading-relaxed">{project.review}</p>
                        </div>
                    }
                })}
            {project
                .video
                .map(|url| {
                    view! {
                        <div class="mt-4">
                            <h4 class="text-base font-semibold text-gray-700 mb-2 text-center">
                                "구현 영상"
                            </h4>
                            <div class="overflow-hidden">
                                <VideoPlayer url height="260px" />
                            </div>
                        </div>
                    }
                })}
            {project
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-1 text-sm text-blue-600 hover:text-blue-800 font-medium"
                        >
                            "프로젝트 보기 →"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn Highlights(items: &'static [&'static str], class: &'static str) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=class>
                <h4 class=SUBHEADING>"주요 개발 기능"</h4>
                <ul class="space-y-2">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start gap-2 text-gray-700">
                                    <span class="text-gray-900 mt-1">"•"</span>
                                    <span>{*item}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
fn TechStack(skills: &'static [TechSkill], #[prop(optional)] rounded: bool) -> impl IntoView {
    let chip_class = if rounded {
        "flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-800 font-medium hover:bg-gray-200 transition-colors duration-200 rounded-lg"
    } else {
        "flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-800 font-medium hover:bg-gray-200 transition-colors duration-200"
    };
    (!skills.is_empty()).then(|| {
        view! {
            <div class="my-4">
                <h4 class=SUBHEADING>"Tech Stack"</h4>
                <div class="flex flex-wrap gap-2">
                    {skills
                        .iter()
                        .map(|skill| {
                            let icon = match skill.icon {
                                TechIcon::Emoji(e) => {
                                    Either::Left(view! { <span class="text-lg">{e}</span> })
                                }
                                TechIcon::Image { src, alt } => {
                                    Either::Right(
                                        view! {
                                            <span class="flex items-center">
                                                <img src=src alt=alt class="w-6 h-6" />
                                            </span>
                                        },
                                    )
                                }
                            };
                            view! {
                                <div class=chip_class>
                                    {icon}
                                    <span>{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[component]
fn Review(text: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 bg-blue-50 border-l-4 border-blue-600">
            <h4 class="text-blue-900 font-semibold mb-2 flex items-center gap-2">
                <span>"💭"</span>
                "핵심 기여 및 성과"
            </h4>
            <p class="text-gray-800 leading-relaxed whitespace-pre-line">{text}</p>
        </div>
    }
}

#[component]
fn StoreButton(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "inline-flex items-center gap-2 px-6 py-3 text-white font-semibold rounded-lg transition-colors duration-200 shadow-md hover:shadow-lg {class}",
            )
        >
            <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">
                <path d=icon />
            </svg>
            <span>{label}</span>
        </a>
    }
}
