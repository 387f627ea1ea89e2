//! Card builders for the directory and spotlight panels.

use crate::selector::MemberCard;

use super::element::Element;

/// Directory logo dimensions, reserved so lazy images don't shift layout
const DIRECTORY_IMAGE_WIDTH: u32 = 300;
const DIRECTORY_IMAGE_HEIGHT: u32 = 200;

fn external_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

fn labelled(label: &str, value: &str) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(label))
        .text(format!(" {}", value))
}

/// `<section class="member-card">` for the full directory
pub fn directory_card(card: &MemberCard) -> Element {
    let mut section = Element::new("section")
        .class(format!("member-card tier-{}", card.tier.as_class()));

    if let Some(image) = &card.image {
        section = section.child(
            Element::new("img")
                .attr("src", image.src.as_str())
                .attr("alt", image.alt.as_str())
                .attr("loading", "lazy")
                .attr("width", DIRECTORY_IMAGE_WIDTH.to_string())
                .attr("height", DIRECTORY_IMAGE_HEIGHT.to_string()),
        );
    }

    section
        .child(Element::new("h3").text(card.name.as_str()))
        .child(Element::new("p").class("address").text(card.address.as_str()))
        .child(Element::new("p").class("phone").text(card.phone.as_str()))
        .child(external_link(&card.website, "Visit Website"))
        .child(
            Element::new("p")
                .class("level")
                .text(format!("Membership Level: {}", card.level_label)),
        )
}

/// `<article class="spotlight-card">` for the landing page spotlight
pub fn spotlight_card(card: &MemberCard) -> Element {
    let mut article = Element::new("article")
        .class(format!("spotlight-card tier-{}", card.tier.as_class()))
        .child(Element::new("h3").text(card.name.as_str()));

    if let Some(image) = &card.image {
        article = article.child(
            Element::new("img")
                .class("logo")
                .attr("src", image.src.as_str())
                .attr("alt", image.alt.as_str())
                .attr("loading", "lazy"),
        );
    }

    article
        .child(labelled("Level:", &card.level_label))
        .child(labelled("Phone:", &card.phone))
        .child(labelled("Address:", &card.address))
        .child(Element::new("p").child(external_link(&card.website, &card.website)))
}
