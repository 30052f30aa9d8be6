use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BenefitCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[styled_component(BenefitCard)]
pub fn benefit_card(props: &BenefitCardProps) -> Html {
    let stagger = css!("animation-delay: ${delay}ms;", delay = props.delay_ms);

    html! {
        <div class={classes!("benefit-card", "slide-up", stagger)}>
            <div class="benefit-icon">{props.icon.clone()}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HallTileProps {
    pub name: AttrValue,
    pub index: u32,
}

/// Partner hall badge; tiles fade in 50ms apart.
#[styled_component(HallTile)]
pub fn hall_tile(props: &HallTileProps) -> Html {
    let stagger = css!("animation-delay: ${delay}ms;", delay = props.index * 50);

    html! {
        <div class={classes!("hall-tile", "fade-in", stagger)}>
            <div class="hall-icon">{"🏠"}</div>
            <div class="hall-name">{props.name.clone()}</div>
        </div>
    }
}
