use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::interactions::PageInteractions;
use crate::telemetry::LogTelemetry;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<PageConfig>,
}

struct Card {
    title: &'static str,
    body: &'static str,
}

const PROBLEMS: [Card; 3] = [
    Card {
        title: "Missed calls, lost jobs",
        body: "Homeowners with a leaking roof call the next contractor on the list when nobody picks up.",
    },
    Card {
        title: "Storm season overload",
        body: "After a hailstorm the phones ring all day while your crew is up on a roof.",
    },
    Card {
        title: "After-hours voicemail",
        body: "Most emergency calls come in at night and on weekends. Voicemail rarely gets a callback.",
    },
];

const FEATURES: [Card; 4] = [
    Card {
        title: "Answers every call",
        body: "Picks up 24/7 in a natural voice and knows your service area, pricing ranges and availability.",
    },
    Card {
        title: "Qualifies the lead",
        body: "Asks about roof type, damage, insurance claims and urgency before anything reaches you.",
    },
    Card {
        title: "Books inspections",
        body: "Puts the appointment straight on your calendar and texts the homeowner a confirmation.",
    },
    Card {
        title: "Hands off emergencies",
        body: "Active leaks and storm damage get forwarded to your on-call number immediately.",
    },
];

const STEPS: [Card; 3] = [
    Card {
        title: "Forward your line",
        body: "Point your business number at the receptionist when you are busy or after hours.",
    },
    Card {
        title: "We tune it to your shop",
        body: "Services, service area, pricing and booking rules are set up with you in one call.",
    },
    Card {
        title: "Wake up to booked jobs",
        body: "Every call is summarised and every inspection is already on the calendar.",
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "We booked eleven inspections the weekend after the hail came through. None of them went to voicemail.",
        "Owner, residential roofing company",
    ),
    (
        "Homeowners don't realise they're talking to an AI. They just know someone answered.",
        "Office manager, commercial roofer",
    ),
    (
        "It paid for itself with the first replacement job it booked.",
        "Founder, family roofing business",
    ),
];

fn cards(class: &'static str, items: &[Card]) -> Html {
    items
        .iter()
        .map(|card| {
            html! {
                <div class={class}>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                </div>
            }
        })
        .collect::<Html>()
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Bind scrolling, reveal, modal and booking behaviour once the markup is in the DOM
    {
        let config = props.config.clone();
        use_effect_with_deps(
            move |config: &Rc<PageConfig>| {
                let interactions = match PageInteractions::install(config, Rc::new(LogTelemetry)) {
                    Ok(bound) => Some(bound),
                    Err(e) => {
                        error!("Could not bind page interactions: {}", e);
                        None
                    }
                };
                move || drop(interactions)
            },
            config,
        );
    }

    let line = &props.config.demo_line;

    html! {
        <div class="landing-page">
            <nav class="nav">
                <div class="nav-content">
                    <a href="#top" class="nav-logo">{"RoofLine AI"}</a>
                    <div class="nav-links">
                        <a href="#features" class="nav-link">{"Features"}</a>
                        <a href="#how-it-works" class="nav-link">{"How it works"}</a>
                        <a href="#testimonials" class="nav-link">{"Results"}</a>
                        <a href="#book" class="nav-cta">{"Book a demo"}</a>
                    </div>
                </div>
            </nav>

            <header class="hero" id="top">
                <div class="hero-content">
                    <h1 class="hero-title">{"Never miss another roofing lead"}</h1>
                    <p class="hero-subtitle">
                        {"An AI receptionist that answers every call, qualifies the homeowner and books the inspection while you're on the roof."}
                    </p>
                    <div class="hero-cta-group">
                        <button id="playDemoBtn" class="hero-cta" type="button">
                            {"Hear it live"}
                        </button>
                        <a href="#book" class="hero-secondary">{"Book a walkthrough"}</a>
                    </div>
                    <p class="hero-note">{format!("Or call the demo line at {}", line.display())}</p>
                </div>
            </header>

            <section id="problem" class="section">
                <h2>{"Every unanswered call is a roof someone else replaces"}</h2>
                <div class="card-grid">{cards("problem-card", &PROBLEMS)}</div>
            </section>

            <section id="features" class="section">
                <h2>{"A receptionist that knows roofing"}</h2>
                <div class="card-grid">{cards("feature-card", &FEATURES)}</div>
            </section>

            <section id="how-it-works" class="section">
                <h2>{"Live in a day"}</h2>
                <div class="steps">{cards("step", &STEPS)}</div>
            </section>

            <section id="testimonials" class="section">
                <h2>{"Roofers who stopped missing calls"}</h2>
                <div class="card-grid">
                    {
                        TESTIMONIALS.iter().map(|(quote, who)| html! {
                            <div class="testimonial-card">
                                <p class="quote">{format!("\u{201c}{}\u{201d}", quote)}</p>
                                <span class="author">{*who}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="book" class="section">
                <h2>{"Book a walkthrough"}</h2>
                <div id="calendarEmbed" class="calendar-embed">
                    {
                        match &props.config.calendar_embed_url {
                            Some(url) => html! {
                                <iframe src={url.clone()} title="Book a demo" loading="lazy"></iframe>
                            },
                            None => html! {
                                <p class="calendar-fallback">
                                    {format!("Scheduling is opening soon. Call {} to set up a time.", line.display())}
                                </p>
                            },
                        }
                    }
                </div>
            </section>

            <footer class="footer">
                <a href="#top">{"Back to top"}</a>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0f0f1a;
                    color: #f5f5f7;
                    min-height: 100vh;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(15, 15, 26, 0.8);
                    backdrop-filter: blur(10px);
                    transition: background 0.3s ease;
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.3rem;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }

                .nav-link, .hero-secondary, .footer a {
                    color: #c8c8d8;
                    text-decoration: none;
                }

                .nav-cta, .hero-cta {
                    background: #f97316;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.7rem 1.4rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }

                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }

                .hero-title {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }

                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.2rem;
                    color: #c8c8d8;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }

                .hero-note {
                    margin-top: 1.5rem;
                    color: #8a8aa0;
                }

                .section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .section h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .card-grid, .steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .problem-card, .feature-card, .step, .testimonial-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 1.75rem;
                }

                .testimonial-card .author {
                    color: #8a8aa0;
                    font-size: 0.9rem;
                }

                .calendar-embed iframe {
                    width: 100%;
                    min-height: 700px;
                    border: none;
                    border-radius: 16px;
                }

                .calendar-fallback {
                    text-align: center;
                    color: #c8c8d8;
                }

                .footer {
                    text-align: center;
                    padding: 3rem 2rem;
                }

                #demoModal {
                    display: none;
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    align-items: center;
                    justify-content: center;
                }

                #demoModal.active {
                    display: flex;
                }

                .demo-modal-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                }

                .demo-modal-content {
                    position: relative;
                    background: #1a1a2e;
                    border-radius: 20px;
                    padding: 2.5rem;
                    max-width: 420px;
                    width: calc(100% - 2rem);
                    text-align: center;
                }

                .demo-modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #c8c8d8;
                    font-size: 1.8rem;
                    cursor: pointer;
                }

                .demo-modal-icon {
                    color: #f97316;
                    margin-bottom: 1rem;
                }

                .demo-option {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin: 1.5rem 0 1rem;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    text-decoration: none;
                    text-align: left;
                }

                .demo-option-primary {
                    background: #f97316;
                    color: #fff;
                }

                .demo-option span {
                    display: block;
                    font-size: 0.85rem;
                    opacity: 0.85;
                }

                .demo-modal-note {
                    font-size: 0.85rem;
                    color: #8a8aa0;
                }

                @media (max-width: 700px) {
                    .nav-links .nav-link {
                        display: none;
                    }
                    .hero-title {
                        font-size: 2.4rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
