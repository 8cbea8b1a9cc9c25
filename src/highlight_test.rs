use super::*;

fn hrefs() -> Vec<String> {
    ["#home", "#about", "#projects", "/blog"].into_iter().map(str::to_string).collect()
}

#[test]
fn section_id_matches_fragment_href() {
    assert_eq!(links_for_section(&hrefs(), "about"), vec![1]);
    assert_eq!(links_for_section(&hrefs(), "projects"), vec![2]);
}

#[test]
fn every_link_to_a_section_matches() {
    let hrefs: Vec<String> = ["#home", "#contact", "#about", "#contact"].into_iter().map(str::to_string).collect();
    assert_eq!(links_for_section(&hrefs, "contact"), vec![1, 3]);
}

#[test]
fn unmatched_section_has_no_link() {
    assert!(links_for_section(&hrefs(), "contact").is_empty());
    assert!(links_for_section(&hrefs(), "blog").is_empty());
}

#[test]
fn activate_clears_all_then_sets_one() {
    let effects = activate(3, &[2]);
    assert_eq!(
        effects,
        vec![
            Effect::RemoveClass(Target::NavLink(0), ACTIVE_CLASS),
            Effect::RemoveClass(Target::NavLink(1), ACTIVE_CLASS),
            Effect::RemoveClass(Target::NavLink(2), ACTIVE_CLASS),
            Effect::AddClass(Target::NavLink(2), ACTIVE_CLASS),
        ]
    );
}

#[test]
fn activate_sets_each_index() {
    let effects = activate(3, &[0, 2]);
    assert_eq!(
        effects[3..],
        [
            Effect::AddClass(Target::NavLink(0), ACTIVE_CLASS),
            Effect::AddClass(Target::NavLink(2), ACTIVE_CLASS),
        ]
    );
}

#[test]
fn activate_none_only_clears() {
    let effects = activate(2, &[]);
    assert_eq!(effects.len(), 2);
    assert!(effects.iter().all(|e| matches!(e, Effect::RemoveClass(_, _))));
}

#[test]
fn activate_out_of_range_only_clears() {
    let effects = activate(2, &[7]);
    assert_eq!(effects.len(), 2);
}
