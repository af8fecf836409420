//! Password Strength Meter

use leptos::*;
use vista::strength::Strength;

/// Bar and caption under the registration password field
#[component]
pub fn StrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = move || Strength::of(&password.get());

    view! {
        <div class="password-strength">
            <div class="strength-bar">
                <div
                    class=move || {
                        strength()
                            .label
                            .map(|l| format!("strength-fill {}", l.class()))
                            .unwrap_or_else(|| "strength-fill".to_string())
                    }
                    style=move || {
                        let s = strength();
                        let color = s.label.map(|l| l.color()).unwrap_or("transparent");
                        format!("width: {}%; background-color: {}", s.score as u32 * 25, color)
                    }
                />
            </div>
            <span class="strength-text">
                {move || strength().label.map(|l| l.text()).unwrap_or("")}
            </span>
        </div>
    }
}
