use app::components::toggle_menu;

#[test]
fn two_toggles_return_the_menu_to_hidden() {
    let mut open = false;

    toggle_menu(&mut open);
    assert!(open);

    toggle_menu(&mut open);
    assert!(!open);
}
