//! Query engine: filter, sort and join across the three repositories.

use crate::store::Store;
use pokedex_core::{Category, Creature, Move};

/// Upper bound on example peers listed in a creature detail.
pub const MAX_EXAMPLE_PEERS: usize = 2;

/// Ordering applied to a filtered creature listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Storage order
    #[default]
    Unsorted,
    /// Ascending base attack
    BaseAttack,
}

impl SortMode {
    /// Parse the `sortby` value. Only `"BaseAttack"` is recognized; anything
    /// else, including absence, means storage order.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("BaseAttack") => SortMode::BaseAttack,
            _ => SortMode::Unsorted,
        }
    }

    /// The `sortby` value that selects this mode.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortMode::Unsorted => None,
            SortMode::BaseAttack => Some("BaseAttack"),
        }
    }
}

/// Creatures having a given category, in listing order.
///
/// The ordering is fixed over the whole collection when the listing is
/// built; filtering is applied lazily on each call to [`iter`](Self::iter),
/// so the listing can be walked any number of times.
#[derive(Debug, Clone)]
pub struct CategoryListing<'a> {
    category: String,
    sort: SortMode,
    order: Vec<&'a Creature>,
}

impl<'a> CategoryListing<'a> {
    /// The category being filtered on
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The ordering in effect
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Matching creatures in listing order
    pub fn iter(&self) -> impl Iterator<Item = &'a Creature> + '_ {
        self.order
            .iter()
            .copied()
            .filter(move |creature| creature.has_category(&self.category))
    }

    /// Check if no creature matches
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Detail view of one creature joined with categories, peers and moves.
///
/// Every joined sequence is computed lazily from the store in storage order.
#[derive(Debug, Clone, Copy)]
pub struct CreatureDetail<'a> {
    store: &'a Store,
    creature: &'a Creature,
}

impl<'a> CreatureDetail<'a> {
    /// The creature this detail is about
    pub fn creature(&self) -> &'a Creature {
        self.creature
    }

    /// Category records named by the creature's primary or secondary category
    pub fn category_details(&self) -> impl Iterator<Item = &'a Category> + 'a {
        let creature = self.creature;
        self.store
            .categories
            .iter()
            .filter(move |category| creature.has_category(category.name.as_str()))
    }

    /// Up to [`MAX_EXAMPLE_PEERS`] other creatures sharing a category with this one
    pub fn example_peers(&self) -> impl Iterator<Item = &'a Creature> + 'a {
        let creature = self.creature;
        self.store
            .creatures
            .iter()
            .filter(move |peer| peer.name != creature.name && creature.shares_category_with(peer))
            .take(MAX_EXAMPLE_PEERS)
    }

    /// Every move whose category is one of the creature's categories
    pub fn applicable_moves(&self) -> impl Iterator<Item = &'a Move> + 'a {
        let creature = self.creature;
        self.store
            .moves
            .iter()
            .filter(move |mv| mv.applies_to(creature))
    }
}

impl Store {
    /// List every category in storage order.
    pub fn list_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Names of every creature in storage order.
    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.creatures.iter().map(|c| c.name.as_str())
    }

    /// Creatures whose primary or secondary category equals `category`.
    ///
    /// With [`SortMode::BaseAttack`] the whole collection is stably sorted by
    /// ascending base attack before the filter runs, so matches come out in
    /// that order.
    pub fn creatures_by_category(&self, category: &str, sort: SortMode) -> CategoryListing<'_> {
        let mut order: Vec<&Creature> = self.creatures.iter().collect();
        if sort == SortMode::BaseAttack {
            order.sort_by_key(|creature| creature.base_attack);
        }

        CategoryListing {
            category: category.to_string(),
            sort,
            order,
        }
    }

    /// Detail for the first creature named `name`.
    pub fn creature_detail(&self, name: &str) -> Option<CreatureDetail<'_>> {
        self.creature(name).map(|creature| CreatureDetail {
            store: self,
            creature,
        })
    }

    /// The first category named `name`.
    pub fn category_detail(&self, name: &str) -> Option<&Category> {
        self.category(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{CategoryName, Dataset};

    fn store() -> Store {
        Store::new(Dataset {
            categories: vec![
                Category::new("Fire").effective_against(["Grass", "Ice"]).weak_against(["Water"]),
                Category::new("Water").effective_against(["Fire"]).weak_against(["Grass"]),
                Category::new("Flying").effective_against(["Grass"]).weak_against(["Rock"]),
                Category::new("Grass").effective_against(["Water"]).weak_against(["Fire"]),
            ],
            creatures: vec![
                Creature::new("006", "Charizard", "Fire").with_secondary("Flying").with_base_attack(223),
                Creature::new("007", "Squirtle", "Water").with_base_attack(94),
                Creature::new("004", "Charmander", "Fire").with_base_attack(116),
                Creature::new("016", "Pidgey", "Normal").with_secondary("Flying").with_base_attack(85),
                Creature::new("037", "Vulpix", "Fire").with_base_attack(106),
                Creature::new("058", "Growlithe", "Fire").with_base_attack(156),
            ],
            moves: vec![
                Move::new(1, "Ember", "Fire"),
                Move::new(2, "Bubble", "Water"),
                Move::new(3, "Wing Attack", "Flying"),
                Move::new(4, "Fire Blast", "Fire"),
            ],
        })
    }

    fn names<'a>(creatures: impl Iterator<Item = &'a Creature>) -> Vec<&'a str> {
        creatures.map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_list_categories_storage_order() {
        let store = store();
        let listed: Vec<_> = store.list_categories().map(|c| c.name.as_str()).collect();
        assert_eq!(listed, vec!["Fire", "Water", "Flying", "Grass"]);

        assert_eq!(Store::empty().list_categories().count(), 0);
    }

    #[test]
    fn test_filter_by_category() {
        let store = store();

        let listing = store.creatures_by_category("Fire", SortMode::Unsorted);
        assert_eq!(
            names(listing.iter()),
            vec!["Charizard", "Charmander", "Vulpix", "Growlithe"]
        );

        let listing = store.creatures_by_category("Flying", SortMode::Unsorted);
        assert_eq!(names(listing.iter()), vec!["Charizard", "Pidgey"]);
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let store = store();
        for category in ["Fire", "Water", "Flying", "Normal", "Grass"] {
            let listing = store.creatures_by_category(category, SortMode::Unsorted);
            let matched = names(listing.iter());
            for creature in store.creatures() {
                let expected = creature.primary_category == category
                    || creature.secondary_category.as_ref().is_some_and(|c| c == category);
                assert_eq!(matched.contains(&creature.name.as_str()), expected);
            }
        }
    }

    #[test]
    fn test_filter_is_exact() {
        let store = store();
        assert!(store.creatures_by_category("fire", SortMode::Unsorted).is_empty());
        assert!(store.creatures_by_category("FireFlying", SortMode::Unsorted).is_empty());
        assert!(store.creatures_by_category("Dragon", SortMode::Unsorted).is_empty());
    }

    #[test]
    fn test_sort_by_base_attack() {
        let store = store();
        let listing = store.creatures_by_category("Fire", SortMode::BaseAttack);

        assert_eq!(
            names(listing.iter()),
            vec!["Vulpix", "Charmander", "Growlithe", "Charizard"]
        );

        let attacks: Vec<_> = listing.iter().map(|c| c.base_attack).collect();
        assert!(attacks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_does_not_reorder_store() {
        let store = store();
        let _ = store.creatures_by_category("Fire", SortMode::BaseAttack);
        assert_eq!(store.creatures()[0].name, "Charizard");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let store = Store::new(Dataset {
            categories: vec![],
            creatures: vec![
                Creature::new("1", "B", "Fire").with_base_attack(10),
                Creature::new("2", "A", "Fire").with_base_attack(5),
                Creature::new("3", "C", "Fire").with_base_attack(10),
            ],
            moves: vec![],
        });
        let listing = store.creatures_by_category("Fire", SortMode::BaseAttack);
        assert_eq!(names(listing.iter()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_listing_is_restartable() {
        let store = store();
        let listing = store.creatures_by_category("Water", SortMode::Unsorted);

        assert_eq!(names(listing.iter()), vec!["Squirtle"]);
        assert_eq!(names(listing.iter()), vec!["Squirtle"]);
        assert_eq!(listing.category(), "Water");
        assert_eq!(listing.sort(), SortMode::Unsorted);
    }

    #[test]
    fn test_sort_mode_from_param() {
        assert_eq!(SortMode::from_param(Some("BaseAttack")), SortMode::BaseAttack);
        assert_eq!(SortMode::from_param(Some("baseattack")), SortMode::Unsorted);
        assert_eq!(SortMode::from_param(Some("Name")), SortMode::Unsorted);
        assert_eq!(SortMode::from_param(None), SortMode::Unsorted);
        assert_eq!(SortMode::BaseAttack.as_param(), Some("BaseAttack"));
    }

    #[test]
    fn test_creature_detail_category_join() {
        let store = store();
        let detail = store.creature_detail("Charizard").unwrap();

        let categories: Vec<_> = detail.category_details().map(|c| c.name.as_str()).collect();
        assert_eq!(categories, vec!["Fire", "Flying"]);

        let fire = detail.category_details().next().unwrap();
        assert_eq!(fire.effective_against, vec![CategoryName::new("Grass"), CategoryName::new("Ice")]);
    }

    #[test]
    fn test_creature_detail_example_peers() {
        let store = store();

        let detail = store.creature_detail("Charizard").unwrap();
        assert_eq!(names(detail.example_peers()), vec!["Charmander", "Pidgey"]);

        let detail = store.creature_detail("Squirtle").unwrap();
        assert_eq!(detail.example_peers().count(), 0);

        for creature in store.creatures() {
            let detail = store.creature_detail(&creature.name).unwrap();
            let peers = names(detail.example_peers());
            assert!(peers.len() <= MAX_EXAMPLE_PEERS);
            assert!(!peers.contains(&creature.name.as_str()));
        }
    }

    #[test]
    fn test_creature_detail_moves() {
        let store = store();

        let detail = store.creature_detail("Charizard").unwrap();
        let moves: Vec<_> = detail.applicable_moves().map(|m| m.name.as_str()).collect();
        assert_eq!(moves, vec!["Ember", "Wing Attack", "Fire Blast"]);

        let detail = store.creature_detail("Squirtle").unwrap();
        let moves: Vec<_> = detail.applicable_moves().map(|m| m.name.as_str()).collect();
        assert_eq!(moves, vec!["Bubble"]);
    }

    #[test]
    fn test_creature_detail_missing() {
        let store = store();
        assert!(store.creature_detail("Mewtwo").is_none());
        assert!(store.creature_detail("charizard").is_none());
    }

    #[test]
    fn test_category_detail() {
        let store = store();

        let water = store.category_detail("Water").unwrap();
        assert_eq!(water.effective_against, vec![CategoryName::new("Fire")]);
        assert_eq!(water.weak_against, vec![CategoryName::new("Grass")]);

        assert!(store.category_detail("Dragon").is_none());
    }

    #[test]
    fn test_fire_scenario() {
        let store = Store::new(Dataset {
            categories: vec![Category::new("Fire").effective_against(["Grass"]).weak_against(["Water"])],
            creatures: vec![
                Creature::new("006", "Charizard", "Fire").with_base_attack(100),
                Creature::new("004", "Charmander", "Fire").with_base_attack(50),
            ],
            moves: vec![],
        });

        let listing = store.creatures_by_category("Fire", SortMode::BaseAttack);
        assert_eq!(names(listing.iter()), vec!["Charmander", "Charizard"]);

        let detail = store.creature_detail("Charizard").unwrap();
        let fire = detail.category_details().next().unwrap();
        assert_eq!(fire.effective_against, vec![CategoryName::new("Grass")]);
        assert_eq!(names(detail.example_peers()), vec!["Charmander"]);
    }
}
