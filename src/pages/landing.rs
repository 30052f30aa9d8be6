use log::{debug, warn};
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::benefit_card::{BenefitCard, HallTile};
use crate::components::signup_form::FORM_STYLES;
use crate::components::student_form::StudentWaitlistForm;
use crate::components::vendor_form::VendorWaitlistForm;
use crate::signup::student::HALLS;

const FORM_SECTION_ID: &str = "waitlist-form";

/// Which signup form the toggle currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveForm {
    #[default]
    Student,
    Vendor,
}

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "🍃",
        title: "100% Eco-Friendly",
        description: "Electric bikes and carbon-neutral operations. Every delivery helps reduce environmental impact while keeping costs low.",
    },
    Benefit {
        icon: "⚡",
        title: "Lightning Fast Delivery",
        description: "30-minute average delivery time within halls. Our optimized routes and dedicated student riders ensure quick service.",
    },
    Benefit {
        icon: "🛡️",
        title: "Student-Safe Network",
        description: "All riders are verified students from your halls. Secure, reliable, and built by students, for students.",
    },
    Benefit {
        icon: "🕒",
        title: "24/7 Hall Service",
        description: "Late-night study sessions? We've got you covered. Food, supplies, and essentials delivered around the clock.",
    },
];

const FOUNDING_MEMBER_PERKS: [&str; 6] = [
    "50% off delivery fees for your first 6 months",
    "Priority delivery during peak hours",
    "Exclusive access to new features before general release",
    "Monthly sustainability impact reports",
    "Direct line to our founders for feedback and suggestions",
    "Founding Member badge and special recognition in the app",
];

struct Stat {
    end: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { end: 2847, suffix: "+", label: "Students Already Joined" },
    Stat { end: HALLS.len() as u32, suffix: "", label: "Halls Partnered" },
    Stat { end: 95, suffix: "%", label: "Carbon Footprint Reduction" },
];

fn scroll_to_form() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document to scroll");
        return;
    };
    match document.get_element_by_id(FORM_SECTION_ID) {
        // `scroll-behavior: smooth` on <html> makes this animate
        Some(section) => section.scroll_into_view(),
        None => warn!("#{} not found", FORM_SECTION_ID),
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub initial_form: ActiveForm,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let active_form = use_state(|| props.initial_form);

    // Follow route changes between / and /vendors
    {
        let active_form = active_form.clone();
        use_effect_with_deps(
            move |initial| {
                active_form.set(*initial);
                || ()
            },
            props.initial_form,
        );
    }

    let select_form = |form: ActiveForm| {
        let active_form = active_form.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Switching to {:?} form", form);
            active_form.set(form);
        })
    };
    let on_join = Callback::from(|_: MouseEvent| scroll_to_form());

    let toggle_class = |form: ActiveForm| {
        classes!("form-toggle-button", (*active_form == form).then_some("active"))
    };

    html! {
        <div class="landing">
            <style>{LANDING_STYLES}</style>
            <style>{FORM_STYLES}</style>

            <section class="hero">
                <div class="hero-content">
                    <div class="launch-badge bounce-gentle">{"🚀 Launching Soon"}</div>
                    <h1 class="slide-up">
                        <span class="gradient-text">{"Join the Future of"}</span>
                        <br />
                        <span class="gradient-text">{"Sustainable Delivery"}</span>
                    </h1>
                    <p class="hero-subheadline slide-up">
                        {"Be the first to experience Nigeria's most innovative eco-friendly delivery platform. "}
                        <br class="desktop-only" />
                        {"Zero emissions, maximum convenience, built for students."}
                    </p>
                    <div class="hero-cta slide-up">
                        <button class="btn-primary" onclick={on_join}>{"Join Waitlist Now"}</button>
                        <a class="btn-outline" href="#benefits">{"Learn More"}</a>
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat slide-up" key={stat.label}>
                            <div class="stat-value">
                                <AnimatedCounter end={stat.end} suffix={stat.suffix} />
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="benefits" class="benefits">
                <div class="section-heading">
                    <h2>{"Why Choose Cydex?"}</h2>
                    <p>{"We're not just another delivery app. We're building the future of sustainable, student-focused logistics."}</p>
                </div>
                <div class="benefits-grid">
                    { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <BenefitCard
                            key={benefit.title}
                            icon={benefit.icon}
                            title={benefit.title}
                            description={benefit.description}
                            delay_ms={index as u32 * 100}
                        />
                    }) }
                </div>
            </section>

            <section class="perks">
                <div class="section-heading">
                    <div class="launch-badge">{"⭐ Exclusive Founding Member Benefits"}</div>
                    <h2>{"Join the First 5,000"}</h2>
                    <p>{"Early supporters get lifetime perks and exclusive access to shape Cydex's future."}</p>
                </div>
                <div class="perks-panel slide-up">
                    { for FOUNDING_MEMBER_PERKS.iter().map(|perk| html! {
                        <div class="perk" key={*perk}>
                            <span class="perk-check">{"✓"}</span>
                            <span>{*perk}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id={FORM_SECTION_ID} class="waitlist">
                <div class="form-toggle">
                    <button class={toggle_class(ActiveForm::Student)} onclick={select_form(ActiveForm::Student)}>
                        {"👥 Students"}
                    </button>
                    <button class={toggle_class(ActiveForm::Vendor)} onclick={select_form(ActiveForm::Vendor)}>
                        {"🏪 Vendors"}
                    </button>
                </div>
                <div class="form-slot">
                    {
                        match *active_form {
                            ActiveForm::Student => html! { <StudentWaitlistForm /> },
                            ActiveForm::Vendor => html! { <VendorWaitlistForm /> },
                        }
                    }
                </div>
            </section>

            <section class="halls">
                <div class="section-heading">
                    <h3>{"Partnering with Top University Halls"}</h3>
                    <p>{"We're working closely with leading halls of residence to bring sustainable delivery to every student."}</p>
                </div>
                <div class="halls-grid">
                    { for HALLS.iter().enumerate().map(|(index, hall)| html! {
                        <HallTile key={*hall} name={*hall} index={index as u32} />
                    }) }
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-brand">{"🍃 Cydex"}</div>
                <p>
                    {"Building Nigeria's most sustainable delivery network, one hall at a time. Join us in creating a greener future for student communities."}
                </p>
                <div class="footer-tags">
                    <span>{"👥 Student-Built Platform"}</span>
                    <span>{"🍃 100% Carbon Neutral"}</span>
                    <span>{"📈 Nigerian Innovation"}</span>
                </div>
            </footer>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: "Clash Display", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: #111827;
}
*, *::before, *::after {
    box-sizing: border-box;
}
.landing {
    min-height: 100vh;
    background: linear-gradient(135deg, #ffffff 0%, #ffffff 60%, #dcfce7 100%);
}
.hero {
    padding: 5rem 1.5rem 4rem;
    text-align: center;
}
.hero-content {
    max-width: 80rem;
    margin: 0 auto;
}
.launch-badge {
    display: inline-flex;
    align-items: center;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: #dcfce7;
    color: #16a34a;
    border: 1px solid rgba(22, 163, 74, 0.2);
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 2rem;
}
.hero h1 {
    font-size: clamp(3rem, 7vw, 4.5rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.gradient-text {
    background: linear-gradient(45deg, #15803d, #22c55e);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-subheadline {
    font-size: 1.25rem;
    color: #6b7280;
    max-width: 56rem;
    margin: 0 auto 3rem;
    line-height: 1.6;
    animation-delay: 200ms;
}
.hero-cta {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
    animation-delay: 400ms;
}
.btn-primary,
.btn-outline {
    font-size: 1.125rem;
    font-weight: 600;
    padding: 1rem 2rem;
    border-radius: 8px;
    cursor: pointer;
    text-decoration: none;
    transition: all 0.2s;
}
.btn-primary {
    background: #16a34a;
    color: #fff;
    border: none;
}
.btn-primary:hover {
    background: #15803d;
}
.btn-outline {
    background: transparent;
    border: 2px solid #16a34a;
    color: #16a34a;
}
.btn-outline:hover {
    background: #16a34a;
    color: #fff;
}
.stats {
    padding: 4rem 1.5rem;
    background: rgba(255, 255, 255, 0.8);
}
.stats-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    text-align: center;
}
.stat-value {
    font-size: 1.875rem;
    font-weight: 700;
    color: #16a34a;
    margin-bottom: 0.5rem;
}
.stat-label {
    font-size: 0.875rem;
    color: #6b7280;
}
.section-heading {
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 3rem;
}
.section-heading h2 {
    font-size: 2.5rem;
    font-weight: 700;
}
.section-heading p {
    font-size: 1.25rem;
    color: #6b7280;
}
.benefits {
    padding: 5rem 1.5rem;
    background: rgba(220, 252, 231, 0.3);
}
.benefits-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}
.benefit-card {
    padding: 1.5rem;
    border-radius: 12px;
    border: 1px solid rgba(0, 0, 0, 0.06);
    background: rgba(255, 255, 255, 0.5);
    transition: all 0.3s;
}
.benefit-card:hover {
    background: #fff;
    transform: translateY(-4px);
    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08);
}
.benefit-icon {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    background: rgba(22, 163, 74, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
    font-size: 1.5rem;
}
.benefit-card h3 {
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
}
.benefit-card p {
    color: #6b7280;
    line-height: 1.6;
}
.perks {
    padding: 5rem 1.5rem;
}
.perks-panel {
    max-width: 56rem;
    margin: 0 auto;
    padding: 2rem;
    border-radius: 16px;
    background: linear-gradient(90deg, rgba(22, 163, 74, 0.05), #dcfce7);
    border: 1px solid rgba(22, 163, 74, 0.1);
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.perk {
    display: flex;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: #6b7280;
}
.perk-check {
    color: #16a34a;
    font-weight: 700;
}
.waitlist {
    padding: 5rem 1.5rem;
    background: rgba(220, 252, 231, 0.2);
}
.form-toggle {
    display: flex;
    justify-content: center;
    gap: 0.25rem;
    width: fit-content;
    margin: 0 auto 2rem;
    padding: 0.25rem;
    background: #fff;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 8px;
}
.form-toggle-button {
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 6px;
    background: transparent;
    color: #6b7280;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.2s;
}
.form-toggle-button:hover {
    color: #111827;
}
.form-toggle-button.active {
    background: #16a34a;
    color: #fff;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
}
.form-slot {
    max-width: 42rem;
    margin: 0 auto;
}
.halls {
    padding: 4rem 1.5rem;
    background: rgba(220, 252, 231, 0.3);
}
.halls-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 1rem;
    text-align: center;
}
.hall-tile {
    padding: 1rem;
    background: rgba(255, 255, 255, 0.6);
    border-radius: 8px;
    border: 1px solid rgba(0, 0, 0, 0.05);
    transition: border-color 0.3s;
}
.hall-tile:hover {
    border-color: rgba(22, 163, 74, 0.3);
}
.hall-icon {
    font-size: 2rem;
    margin-bottom: 0.5rem;
}
.hall-name {
    font-size: 0.875rem;
    font-weight: 500;
    color: #6b7280;
}
.landing-footer {
    padding: 4rem 1.5rem;
    text-align: center;
    background: #fff;
    border-top: 1px solid rgba(0, 0, 0, 0.06);
}
.footer-brand {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.landing-footer p {
    color: #6b7280;
    max-width: 42rem;
    margin: 0 auto 2rem;
}
.footer-tags {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 2rem;
    font-size: 0.875rem;
    color: #6b7280;
}
.slide-up {
    animation: slideUp 0.6s ease-out both;
}
.fade-in {
    animation: fadeIn 0.6s ease-out both;
}
.bounce-gentle {
    animation: bounceGentle 2s ease-in-out infinite;
}
@keyframes slideUp {
    from { transform: translateY(20px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes bounceGentle {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-5px); }
}
@media (max-width: 1024px) {
    .benefits-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
@media (max-width: 768px) {
    .stats-grid,
    .benefits-grid,
    .perks-panel {
        grid-template-columns: 1fr;
    }
    .halls-grid {
        grid-template-columns: repeat(3, 1fr);
    }
    .desktop-only {
        display: none;
    }
}
"#;
