use leptos::prelude::*;

use super::underline::UnderlineText;
use crate::content::KEYWORDS;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto flex flex-col items-center justify-center text-center px-8 py-12 md:py-20 animate-slide-up">
            <h1 class="font-extrabold text-4xl lg:text-6xl tracking-tight mb-6 leading-tight">
                "사용자 경험을 생각하는"
                <br />
                <UnderlineText text="프론트엔드 개발자" color="primary" />
            </h1>
            <p class="text-lg md:text-xl opacity-80 leading-relaxed max-w-2xl mb-8">
                "React Native와 React로 "
                <span class="font-bold text-gray-900">"4.8만 사용자가 쓰는 앱"</span>
                "을 만듭니다."
                <br />
                "협업하고, 문제를 해결하고, 함께 성장합니다."
            </p>
            <div class="flex flex-col sm:flex-row gap-4 mb-10">
                <a
                    href="#projects"
                    class="px-8 py-3 bg-gray-900 text-white font-semibold rounded-lg hover:bg-gray-800 transition-all duration-200 active:scale-95"
                >
                    "프로젝트 보기"
                </a>
                <a
                    href="#contact"
                    class="px-8 py-3 bg-white text-gray-900 font-semibold rounded-lg border-2 border-gray-900 hover:bg-gray-50 transition-all duration-200 active:scale-95"
                >
                    "연락하기"
                </a>
            </div>
            <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8 w-full max-w-4xl">
                {KEYWORDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="p-6 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors duration-200">
                                <span class="text-4xl mb-3 block">{card.emoji}</span>
                                <h3 class="font-bold text-xl text-gray-900 mb-2">{card.title}</h3>
                                <p class="text-gray-600">{card.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
