//! Copy shown in the section panels, keyed by waypoint id.

/// Panel text for a section. Unknown ids get no body text.
pub fn section_blurb(id: &str) -> &'static str {
    match id {
        "sun" => "Scroll to travel outward. Arrow keys, Page Up/Down and swipes step one stop at a time.",
        "mercury" => "The smallest planet, closest to the sun, with a year of only 88 days.",
        "venus" => "Wrapped in thick clouds of sulfuric acid, the hottest surface in the system.",
        "earth" => "Home. The only world known to carry liquid water on its surface.",
        "mars" => "The red planet, with the tallest volcano in the solar system.",
        "jupiter" => "A gas giant more than twice as massive as every other planet combined.",
        "saturn" => "Its rings are mostly ice, spread over a quarter million kilometres.",
        "uranus" => "An ice giant that rolls around the sun on its side.",
        "neptune" => "The outermost planet, where winds reach two thousand kilometres per hour.",
        _ => "",
    }
}

/// Approximate on-screen radius of a body, used for focus framing.
pub fn body_size(id: &str) -> f32 {
    match id {
        "sun" => 1.2,
        "jupiter" => 0.7,
        "saturn" => 0.6,
        "uranus" | "neptune" => 0.45,
        _ => 0.3,
    }
}
