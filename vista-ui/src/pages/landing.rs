//! Landing Page
//!
//! Hero, product grid with category filter, feature tabs, testimonial
//! slider, pricing toggle, FAQ accordion and the three simple forms.

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use vista::nav::Page;
use vista::notify::Notifier;
use vista::page::forms::SUBMIT_LATENCY;
use vista::page::slider::ROTATE_EVERY;
use vista::page::{
    validate_fields, Accordion, PricingPlan, PricingToggle, ProductCard, ProductFilter, Rect,
    SimpleForm, SimpleFormKind, Slider, Tabs, Viewport,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::components::nav::scroll_to_section;
use crate::fixture;
use crate::state::global::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let reveal = window_event_listener(ev::scroll, move |_| reveal_visible());
    on_cleanup(move || reveal.remove());
    request_animation_frame(reveal_visible);

    view! {
        <section class="hero">
            <div class="container hero-content">
                <h1>"See Further with Vista"</h1>
                <p>"Lightweight VR and AR headsets with all-day comfort and pixel-sharp optics."</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll_to_section("products")>
                        "Explore Products"
                    </button>
                    <A href=Page::Register.route() class="btn btn-secondary">"Create Account"</A>
                </div>
            </div>
        </section>

        <Products />
        <Features />
        <Testimonials />
        <Pricing />
        <Faq />

        <section id="contact" class="section">
            <div class="container forms-grid">
                <SimpleFormCard kind=SimpleFormKind::Contact title="Contact Us" />
                <SimpleFormCard kind=SimpleFormKind::DemoRequest title="Book a Demo" />
                <SimpleFormCard kind=SimpleFormKind::Newsletter title="Newsletter" />
            </div>
        </section>
    }
}

/// Add `fade-in` to every `.reveal` element overlapping the viewport
fn reveal_visible() {
    let win = window();
    let scroll_top = win.scroll_y().unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let viewport = Viewport::new(scroll_top, height);

    let Ok(nodes) = document().query_selector_all(".reveal") else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let bounds = element.get_bounding_client_rect();
        let rect = Rect {
            top: bounds.top() + scroll_top,
            bottom: bounds.bottom() + scroll_top,
        };
        if viewport.reveals(rect) {
            let _ = element.class_list().add_1("fade-in");
        }
    }
}

#[component]
fn Products() -> impl IntoView {
    let cards = vec![
        ProductCard::new("Vista One", "vr"),
        ProductCard::new("Vista Pro", "vr"),
        ProductCard::new("Vista Lens", "ar"),
        ProductCard::new("Vista Glass", "ar"),
        ProductCard::new("Motion Controllers", "accessories"),
        ProductCard::new("Comfort Strap", "accessories"),
    ];
    let filter = create_rw_signal(ProductFilter::new());

    let button = move |value: &'static str, label: &'static str| {
        view! {
            <button
                class="filter-btn"
                class:active=move || filter.with(|f| f.active() == value)
                on:click=move |_| filter.update(|f| f.select(value))
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="products" class="section">
            <div class="container">
                <h2 class="section-title">"Products"</h2>
                <div class="filter-buttons">
                    {button("all", "All")}
                    {button("vr", "VR")}
                    {button("ar", "AR")}
                    {button("accessories", "Accessories")}
                </div>
                <div class="product-grid">
                    {cards
                        .into_iter()
                        .map(|card| {
                            let category = card.category.clone();
                            let shown = card.clone();
                            view! {
                                <div
                                    class="product-card reveal"
                                    data-category=category
                                    style:display=move || {
                                        if filter.with(|f| f.shows(&shown)) { "block" } else { "none" }
                                    }
                                >
                                    <h3>{card.name}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    let tabs = create_rw_signal(Tabs::new(["display", "tracking", "comfort"]));

    let tab = move |id: &'static str, label: &'static str| {
        view! {
            <button
                class="tab-btn"
                class:active=move || tabs.with(|t| t.is_active(id))
                on:click=move |_| {
                    tabs.update(|t| {
                        t.activate(id);
                    })
                }
            >
                {label}
            </button>
        }
    };

    let panel = move |id: &'static str, text: &'static str| {
        view! {
            <div class="tab-panel" class:active=move || tabs.with(|t| t.is_active(id))>
                <p>{text}</p>
            </div>
        }
    };

    view! {
        <section id="features" class="section">
            <div class="container">
                <h2 class="section-title">"Features"</h2>
                <div class="tabs">
                    {tab("display", "Display")}
                    {tab("tracking", "Tracking")}
                    {tab("comfort", "Comfort")}
                </div>
                {panel("display", "Dual 4K micro-OLED panels at 120 Hz with a 110° field of view.")}
                {panel("tracking", "Inside-out tracking with hand and eye tracking built in.")}
                {panel("comfort", "Balanced 480 g design with a breathable face interface.")}
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let quotes = [
        ("The clearest passthrough I've used.", "Maya R., architect"),
        ("Our training sessions moved entirely to Vista.", "Jon T., operations lead"),
        ("Comfortable enough to forget I'm wearing it.", "Priya S., game developer"),
    ];
    let slider = create_rw_signal(Slider::new(quotes.len()));

    let rotation = slider
        .with_untracked(|s| s.rotates())
        .then(|| {
            Interval::new(ROTATE_EVERY.as_millis() as u32, move || {
                slider.update(|s| {
                    s.next();
                })
            })
        });
    let rotation = store_value(rotation);
    on_cleanup(move || rotation.set_value(None));

    view! {
        <section id="testimonials" class="section">
            <div class="container testimonial-slider">
                {quotes
                    .iter()
                    .enumerate()
                    .map(|(i, (quote, author))| view! {
                        <div class="testimonial" class:active=move || slider.with(|s| s.is_active(i))>
                            <blockquote>{*quote}</blockquote>
                            <cite>{*author}</cite>
                        </div>
                    })
                    .collect_view()}
                <div class="slider-dots">
                    {(0..quotes.len())
                        .map(|i| view! {
                            <button
                                class="dot"
                                class:active=move || slider.with(|s| s.is_active(i))
                                on:click=move |_| slider.update(|s| {
                                    s.select(i);
                                })
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let plans = vec![
        PricingPlan::new("Starter", 29.99, 299.99),
        PricingPlan::new("Pro", 59.99, 599.99),
        PricingPlan::new("Enterprise", 99.99, 999.99),
    ];
    let toggle = create_rw_signal(PricingToggle::default());

    view! {
        <section id="pricing" class="section">
            <div class="container">
                <h2 class="section-title">"Pricing"</h2>
                <label class="pricing-toggle">
                    <span>"Monthly"</span>
                    <input
                        type="checkbox"
                        on:change=move |ev| toggle.update(|t| t.set_yearly(event_target_checked(&ev)))
                    />
                    <span>"Yearly"</span>
                </label>
                <div class="pricing-grid">
                    {plans
                        .into_iter()
                        .map(|plan| {
                            let name = plan.name.clone();
                            view! {
                                <div class="pricing-card reveal">
                                    <h3>{name}</h3>
                                    <div class="price">{move || toggle.with(|t| t.display(&plan))}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    let items = [
        ("Do I need a PC?", "No. Every Vista headset runs standalone; PC link is optional."),
        ("Can I wear glasses?", "Yes. The Pro and Lens models fit most frames."),
        ("What is the warranty?", "Two years on headsets, one year on accessories."),
    ];
    let accordion = create_rw_signal(Accordion::new());

    view! {
        <section id="faq" class="section">
            <div class="container accordion">
                <h2 class="section-title">"FAQ"</h2>
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| view! {
                        <div class="accordion-item" class:active=move || accordion.with(|a| a.is_open(i))>
                            <button
                                class="accordion-header"
                                on:click=move |_| accordion.update(|a| a.toggle(i))
                            >
                                {*question}
                            </button>
                            <div class="accordion-content">
                                <p>{*answer}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Newsletter, contact or demo request form
#[component]
fn SimpleFormCard(kind: SimpleFormKind, title: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(SimpleForm::new(kind));
    let invalid = create_rw_signal(Vec::<String>::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let fields = form.with(|f| f.fields.clone());
        if let Err(errors) = validate_fields(&fields) {
            state.show_error(&errors.to_string());
            invalid.set(errors.invalid);
            return;
        }
        invalid.set(Vec::new());

        busy.set(true);
        spawn_local(async move {
            let probe_ok = fixture::probe().await.is_ok();
            if probe_ok {
                TimeoutFuture::new(SUBMIT_LATENCY.as_millis() as u32).await;
            }

            let mut notice = None;
            form.update(|f| notice = Some(f.complete(probe_ok)));
            if let Some(notice) = notice {
                state.notify(notice);
            }
            busy.set(false);
        });
    };

    let fields = form.with_untracked(|f| f.fields.clone());

    view! {
        <form class="simple-form reveal" on:submit=on_submit>
            <h3>{title}</h3>
            {fields
                .into_iter()
                .map(|field| {
                    let name = field.name.clone();
                    let error_name = field.name.clone();
                    let value_name = field.name.clone();
                    let input_name = field.name.clone();
                    let has_error = move || invalid.with(|i| i.contains(&error_name));
                    let value = move || form.with(|f| f.value(&value_name).unwrap_or_default().to_string());
                    let on_input = move |ev: web_sys::Event| {
                        let v = event_target_value(&ev);
                        form.update(|f| {
                            f.fill(&input_name, v);
                        });
                    };

                    if name == "message" {
                        view! {
                            <textarea
                                name=name
                                placeholder="Message"
                                class:error=has_error
                                prop:value=value
                                on:input=on_input
                            />
                        }
                        .into_view()
                    } else {
                        let kind = if field.email { "email" } else { "text" };
                        view! {
                            <input
                                type=kind
                                name=name.clone()
                                placeholder=name
                                class:error=has_error
                                prop:value=value
                                on:input=on_input
                            />
                        }
                        .into_view()
                    }
                })
                .collect_view()}
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Submit" }}
            </button>
        </form>
    }
}
