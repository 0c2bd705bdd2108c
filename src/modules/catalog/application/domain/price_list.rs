use super::package::NewPackage;

pub const CATEGORY_UID_TOPUP: &str = "UID Top-up (BD)";
pub const CATEGORY_WEEKLY: &str = "Weekly Membership";
pub const CATEGORY_MONTHLY: &str = "Monthly Membership";
pub const CATEGORY_LEVEL_UP: &str = "Level Up Pass";
pub const CATEGORY_AIRDROP: &str = "Special Airdrop";

// (name, price, diamonds)
const UID_TOPUP: &[(&str, i64, i32)] = &[
    ("25 Diamond", 30, 25),
    ("50 Diamond", 45, 50),
    ("75 Diamond", 65, 75),
    ("100 Diamond", 92, 100),
    ("115 Diamond", 100, 115),
    ("240 Diamond", 170, 240),
    ("355 Diamond", 260, 355),
    ("480 Diamond", 330, 480),
    ("505 Diamond", 360, 505),
    ("610 Diamond", 420, 610),
    ("725 Diamond", 500, 725),
    ("850 Diamond", 570, 850),
    ("1090 Diamond", 750, 1090),
    ("1240 Diamond", 820, 1240),
    ("1595 Diamond", 1060, 1595),
    ("1850 Diamond", 1200, 1850),
    ("2090 Diamond", 1367, 2090),
    ("2530 Diamond", 1595, 2530),
    ("3140 Diamond", 1989, 3140),
    ("4380 Diamond", 2770, 4380),
    ("5060 Diamond", 3140, 5060),
    ("7590 Diamond", 4700, 7590),
    ("10120 Diamond", 6217, 10120),
    ("15180 Diamond", 9348, 15180),
    ("20240 Diamond", 12478, 20240),
];

const WEEKLY: &[(&str, i64)] = &[
    ("Weekly Lite", 60),
    ("Weekly", 167),
    ("5x Weekly Lite", 230),
    ("10x Weekly Lite", 460),
    ("2x Weekly", 333),
    ("3x Weekly", 500),
    ("5x Weekly", 833),
    ("10x Weekly", 1665),
];

const MONTHLY: &[(&str, i64)] = &[
    ("Monthly", 789),
    ("2x Monthly", 1577),
    ("3x Monthly", 2366),
    ("5x Monthly", 3940),
];

const LEVEL_UP: &[(&str, i64, i32)] = &[
    ("Level Up Pass Lv.6 (120 Diamond)", 52, 120),
    ("Level Up Pass Lv.10 (200 Diamond)", 82, 200),
    ("Level Up Pass Lv.15 (200 Diamond)", 82, 200),
    ("Level Up Pass Lv.20 (200 Diamond)", 82, 200),
    ("Level Up Pass Lv.25 (200 Diamond)", 82, 200),
    ("Level Up Pass Lv.30 (350 Diamond)", 125, 350),
    ("Full Level Up Pass (1270 Diamond)", 440, 1270),
];

const AIRDROP: &[(&str, i64)] = &[("99 BDT Airdrop", 99), ("190 BDT Airdrop", 190)];

fn priced(category: &str, items: &[(&str, i64, i32)]) -> Vec<NewPackage> {
    items
        .iter()
        .map(|&(name, price, diamonds)| NewPackage::new(category, name, price, diamonds))
        .collect()
}

fn priced_flat(category: &str, items: &[(&str, i64)]) -> Vec<NewPackage> {
    items
        .iter()
        .map(|&(name, price)| NewPackage::new(category, name, price, 0))
        .collect()
}

/// Built-in Bangladesh price list, in display order.
pub fn bd_price_list() -> Vec<NewPackage> {
    let mut list = priced(CATEGORY_UID_TOPUP, UID_TOPUP);
    list.extend(priced_flat(CATEGORY_WEEKLY, WEEKLY));
    list.extend(priced_flat(CATEGORY_MONTHLY, MONTHLY));
    list.extend(priced(CATEGORY_LEVEL_UP, LEVEL_UP));
    list.extend(priced_flat(CATEGORY_AIRDROP, AIRDROP));
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(list: &[NewPackage], category: &str) -> usize {
        list.iter().filter(|p| p.category == category).count()
    }

    #[test]
    fn has_every_category_in_expected_size() {
        let list = bd_price_list();

        assert_eq!(list.len(), 46);
        assert_eq!(count(&list, CATEGORY_UID_TOPUP), 25);
        assert_eq!(count(&list, CATEGORY_WEEKLY), 8);
        assert_eq!(count(&list, CATEGORY_MONTHLY), 4);
        assert_eq!(count(&list, CATEGORY_LEVEL_UP), 7);
        assert_eq!(count(&list, CATEGORY_AIRDROP), 2);
    }

    #[test]
    fn prices_are_positive_and_names_unique_per_category() {
        let list = bd_price_list();
        assert!(list.iter().all(|p| p.price > 0));

        let mut keys: Vec<_> = list.iter().map(|p| (&p.category, &p.name)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), list.len());
    }

    #[test]
    fn memberships_carry_no_diamonds() {
        let list = bd_price_list();
        assert!(list
            .iter()
            .filter(|p| p.category == CATEGORY_WEEKLY || p.category == CATEGORY_MONTHLY)
            .all(|p| p.diamonds == 0));

        let first = &list[0];
        assert_eq!((first.name.as_str(), first.price, first.diamonds), ("25 Diamond", 30, 25));
    }
}
