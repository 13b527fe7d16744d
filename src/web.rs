use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::{
    Advance, OptionView, Phase, QuizConfig, QuizSession, RadicalCatalog, ResetPrompt, SessionView,
    schedule_advance,
};

const STYLES: &str = r#"
.page { display: flex; flex-direction: column; min-height: 100vh; background: white; font-family: sans-serif; }
.progress { padding-top: 60px; color: #A0A0A0; background: none; border: none; cursor: pointer; }
.prompt { flex: 1; display: flex; flex-direction: column; justify-content: center; align-items: center; }
.glyph { font-size: 64px; margin: 0; }
.pronunciation { font-size: 24px; margin-top: 10px; }
.feedback { min-height: 20px; color: #808080; }
.options { flex: 1; padding: 0 12px; }
.option { display: block; width: 100%; font-size: 26px; padding: 10px 20px; margin: 4px 0; background: white; border: none; box-shadow: 0 0 10px #F0F0F0; transition: opacity 600ms; }
.option.correct { background: #ADC865; }
.option.incorrect { background: #E25B45; }
.option.faded { opacity: 0.4; }
"#;

/// Browser `confirm()` dialog.
struct ConfirmDialog;

impl ResetPrompt for ConfirmDialog {
    fn confirm_reset(&mut self) -> bool {
        window().confirm_with_message("Reset?").unwrap_or(false)
    }
}

#[component]
fn OptionButton(index: usize, option: OptionView, on_pick: Callback<usize>) -> impl IntoView {
    view! {
        <button
            class=option.highlight.css_class()
            type="button"
            disabled=!option.enabled
            on:click=move |_| on_pick.call(index)
        >
            {option.value}
        </button>
    }
}

#[component]
fn RadicalPrompt(state: SessionView, on_pick: Callback<usize>) -> impl IntoView {
    if state.phase == Phase::Exhausted {
        return view! {
            <section class="prompt">
                <p class="pronunciation">"Every radical seen. Tap the counter to start over."</p>
            </section>
        }
        .into_view();
    }

    let feedback = state
        .picked_correctly()
        .map(|correct| if correct { "Correct!" } else { "Not quite." });

    view! {
        <section class="prompt">
            <p class="glyph">{state.glyph.map(String::from)}</p>
            <p class="pronunciation">{state.pronunciation}</p>
            <p class="feedback">{feedback}</p>
        </section>
        <section class="options">
            {state
                .options
                .into_iter()
                .enumerate()
                .map(|(index, option)| view! { <OptionButton index=index option=option on_pick=on_pick /> })
                .collect_view()}
        </section>
    }
    .into_view()
}

#[component]
fn App() -> impl IntoView {
    let config = QuizConfig::default();
    let session = store_value(QuizSession::from_config(RadicalCatalog::builtin(), &config));
    let pending = store_value::<Option<TimeoutHandle>>(None);
    let (state, set_state) = create_signal(session.with_value(|session| session.view()));

    let refresh = move || set_state.set(session.with_value(|session| session.view()));

    let on_pick = Callback::new(move |index: usize| {
        let Some(result) = session.try_update_value(|session| session.pick(index)) else {
            return;
        };

        let reveal = match result {
            Ok(reveal) => reveal,
            Err(error) => {
                log::warn!("{error}");
                return;
            }
        };
        refresh();

        let fire = move || {
            pending.set_value(None);
            let advanced = session.try_update_value(|session| session.advance(reveal.ticket));
            if matches!(advanced, Some(Advance::Drew | Advance::Exhausted)) {
                refresh();
            }
        };

        let handle = schedule_advance(fire, |fire| set_timeout_with_handle(fire, reveal.delay));
        pending.set_value(handle);
    });

    let on_reset = move |_| {
        let confirmed = session
            .try_update_value(|session| session.request_reset(&mut ConfirmDialog))
            .unwrap_or(false);

        if confirmed {
            if let Some(handle) = pending.try_update_value(Option::take).flatten() {
                handle.clear();
            }
            refresh();
        }
    };

    view! {
        <style>{STYLES}</style>
        <main class="page">
            <button class="progress" type="button" on:click=on_reset>
                {move || state.get().progress.to_string()}
            </button>
            {move || view! { <RadicalPrompt state=state.get() on_pick=on_pick /> }}
        </main>
    }
}

/// Mounts the quiz into the document body.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("radical quiz starting");

    mount_to_body(|| view! { <App /> });
}
