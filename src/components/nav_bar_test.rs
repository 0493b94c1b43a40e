use super::*;

#[test]
fn regular_users_see_main_and_profile() {
    let items = nav_items(false);
    let pages: Vec<_> = items.iter().map(|i| i.page).collect();
    assert_eq!(pages, vec!["/main", "/profile"]);
}

#[test]
fn admins_also_see_the_admin_page() {
    let items = nav_items(true);
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].page, "/admin");
}

#[test]
fn nav_item_ids_are_unique() {
    let items = nav_items(true);
    let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}
