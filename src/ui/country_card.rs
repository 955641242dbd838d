//! Country details shown by the search screen.

use crate::catalog::Country;

pub fn country_card_lines(country: &Country) -> Vec<String> {
    let mut lines = vec![
        format!("{} - {}", country.name, country.code),
        format!("The capital is {}", country.capital),
        format!("The surface area is {} km2", country.area),
        format!("It's located in {}", country.continent.name()),
    ];

    if country.landlocked {
        lines.push("It's a landlocked country".to_string());
    } else {
        lines.push("It's not a landlocked country".to_string());
    }

    if country.borders.is_empty() {
        lines.push(format!("{} doesn't border with any other country", country.name));
    } else {
        let word = if country.borders.len() == 1 {
            "country"
        } else {
            "countries"
        };
        lines.push(format!(
            "\n{} borders with {} {}",
            country.name,
            country.borders.len(),
            word
        ));
        lines.extend(country.borders.iter().map(|b| format!(" - {}", b)));
    }

    lines
}
