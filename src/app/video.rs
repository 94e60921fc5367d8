use leptos::{either::Either, prelude::*};

use crate::{config::resolve_public_url, widgets::VideoSource};

#[component]
pub fn VideoPlayer(url: &'static str, #[prop(default = "400px")] height: &'static str) -> impl IntoView {
    let source = VideoSource::from_url(&resolve_public_url(url));
    let src = source.player_url();
    let style = format!("width: 100%; height: {height}");

    match source {
        VideoSource::YouTube(_) => Either::Left(view! {
            <iframe
                src=src
                style=style
                title="구현 영상"
                allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
                {leptos::tachys::html::attribute::loading("lazy")}
            ></iframe>
        }),
        VideoSource::File(_) => Either::Right(view! {
            <video src=src style=style controls=true loop=true preload="metadata"></video>
        }),
    }
}
