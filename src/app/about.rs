use leptos::prelude::*;

use super::{accordion::AccordionList, underline::UnderlineText};
use crate::content::{
    TimelineEntry, CAREER, CERTIFICATIONS, EDUCATION, INTRODUCTION, NAME, PROCESS_STEPS, SKILLS,
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div id="about" class="space-y-16 animate-slide-up">
            <div class="section">
                <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"안녕하세요."</h1>
                <p class="text-xl md:text-2xl text-gray-700">
                    "프론트엔드 개발자 " <UnderlineText text=NAME color="primary" /> "입니다."
                </p>
                <p class="text-lg text-gray-600 mt-3">
                    "React Native 앱 개발 및 웹 개발 (2023.10 ~ 현재)"
                </p>
            </div>
            <div class="section space-y-4">
                {INTRODUCTION
                    .iter()
                    .map(|p| view! { <p class="text-lg text-gray-700 leading-relaxed">{*p}</p> })
                    .collect_view()}
            </div>
            <div class="section">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <Timeline heading="교육" entries=&EDUCATION />
                    <Timeline heading="경력" entries=&CAREER />
                    <Timeline heading="자격증" entries=&CERTIFICATIONS />
                </div>
            </div>
            <div class="section">
                <h2 class="text-2xl md:text-3xl font-bold text-gray-900 mb-3">"기술 스택 및 경험"</h2>
                <p class="text-gray-600 mb-6">"각 항목을 클릭하면 상세 내용을 확인할 수 있습니다"</p>
                <AccordionList items=&SKILLS initially_open=0 />
            </div>
            <ProcessSection />
        </div>
    }
}

#[component]
fn Timeline(heading: &'static str, entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold text-gray-900 mb-3">{heading}</h3>
            <div class="space-y-4">
                {entries
                    .iter()
                    .map(|entry| {
                        let border = if entry.primary {
                            "border-l-4 border-gray-900 pl-4"
                        } else {
                            "border-l-4 border-gray-400 pl-4"
                        };
                        view! {
                            <div class=border>
                                <p class="font-bold text-gray-900 mb-1">{entry.title}</p>
                                <p class="text-gray-600 mb-2">{entry.period}</p>
                                {entry
                                    .note
                                    .map(|note| view! { <p class="text-sm text-gray-500">{note}</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

// arrows point down on mobile and sideways once the steps sit in a row
const ARROW_STYLES: [&str; 2] = ["max-md:-scale-x-100 md:-rotate-90", "md:-scale-x-100 md:-rotate-90"];

#[component]
fn ProcessSection() -> impl IntoView {
    let steps = PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, (emoji, text))| {
            let arrow = ARROW_STYLES.get(i).copied();
            view! {
                <div class="w-full md:w-48 flex flex-col gap-2 items-center justify-center">
                    <span class="text-4xl">{*emoji}</span>
                    <h3 class="font-bold text-white">{*text}</h3>
                </div>
                {arrow.map(|extra_style| view! { <Arrow extra_style /> })}
            }
        })
        .collect_view();

    view! {
        <section class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-8 py-16 md:py-32 text-center">
                <h2 class="max-w-3xl mx-auto font-extrabold text-4xl md:text-5xl tracking-tight mb-6 md:mb-8">
                    "어떻게 개발할까요?"
                </h2>
                <p class="max-w-xl break-keep mx-auto text-lg opacity-90 leading-relaxed mb-12 md:mb-20">
                    "사용자의 문제를 정확히 이해하고, 최적의 기술로 해결하며, 지속적으로 개선합니다."
                </p>
                <div class="flex flex-col md:flex-row justify-center items-center md:items-start gap-6">
                    {steps}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Arrow(extra_style: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("shrink-0 w-12 text-white opacity-70 {extra_style}")
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M19 14l-7 7m0 0l-7-7m7 7V3"
            />
        </svg>
    }
}
