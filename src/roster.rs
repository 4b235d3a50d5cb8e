use crate::types::AstronautRoster;

/// One line per astronaut followed by the summary line, in the exact
/// wording the report has always used.
#[must_use]
pub fn format_roster(roster: &AstronautRoster) -> Vec<String> {
    let mut lines: Vec<String> = roster
        .people
        .iter()
        .map(|astronaut| format!("Astronaut: {0} \tCraft: {1}", astronaut.name, astronaut.craft))
        .collect();
    lines.push(format!("Total number of Astronauts: {0}", roster.number));
    lines
}

pub fn print_roster(roster: &AstronautRoster) {
    for line in format_roster(roster) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::format_roster;
    use crate::types::{Astronaut, AstronautRoster};

    fn roster_of(names: &[&str]) -> AstronautRoster {
        AstronautRoster {
            number: names.len() as u32,
            people: names
                .iter()
                .map(|name| Astronaut {
                    name: (*name).to_string(),
                    craft: String::from("ISS"),
                })
                .collect(),
        }
    }

    #[test]
    fn when_formatting_a_roster_then_one_line_per_astronaut_precedes_the_summary() {
        let roster = roster_of(&["A. Crew", "B. Crew", "C. Crew"]);
        let lines = format_roster(&roster);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Astronaut: A. Crew"));
        assert!(lines[2].contains("Craft: ISS"));
        assert_eq!(lines[3], "Total number of Astronauts: 3");
    }

    #[test]
    fn when_the_summary_is_formatted_then_it_reports_the_declared_count() {
        // The declared count is reported even if it disagrees with the list.
        let mut roster = roster_of(&["Solo Crew"]);
        roster.number = 7;
        let lines = format_roster(&roster);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Total number of Astronauts: 7");
    }

    #[test]
    fn when_the_roster_is_empty_then_only_the_summary_is_emitted() {
        let lines = format_roster(&roster_of(&[]));
        assert_eq!(lines, vec![String::from("Total number of Astronauts: 0")]);
    }
}
