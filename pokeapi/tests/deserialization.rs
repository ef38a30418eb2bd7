use pokeapi::types::{ListingPage, Pokemon};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_listing() {
    let json = load_fixture("listing.json");
    let page: ListingPage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.count, 1302);
    assert_eq!(page.previous, None);
    assert!(page.next.is_some());
    let names: Vec<&str> = page.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    assert_eq!(page.total_pages(12), 109);
}

#[test]
fn deserialize_listing_empty() {
    let json = load_fixture("listing_empty.json");
    let page: ListingPage = serde_json::from_str(&json).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages(12), 0);
}

#[test]
fn deserialize_listing_without_links() {
    let page: ListingPage =
        serde_json::from_str(r#"{"count": 3, "results": [{"name": "a", "url": "u"}]}"#).unwrap();
    assert_eq!(page.next, None);
    assert_eq!(page.total_pages(12), 1);
}

#[test]
fn deserialize_pokemon_full() {
    let json = load_fixture("pikachu.json");
    let pokemon: Pokemon = serde_json::from_str(&json).unwrap();
    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.height, 4);
    assert_eq!(pokemon.weight, 60);
    assert!((pokemon.height_m() - 0.4).abs() < f64::EPSILON);
    assert!((pokemon.weight_kg() - 6.0).abs() < f64::EPSILON);
    assert_eq!(pokemon.stats.len(), 6);
    assert_eq!(pokemon.stats[3].stat.name, "special-attack");
    assert_eq!(pokemon.stats[5].base_stat, 90);
    assert_eq!(pokemon.types[0].slot, 1);
    assert_eq!(
        pokemon.primary_image(),
        Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
    );
    assert_eq!(
        pokemon.alternate_image(),
        Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/25.png")
    );
}

#[test]
fn deserialize_pokemon_types_keep_slot_order() {
    let json = load_fixture("bulbasaur.json");
    let pokemon: Pokemon = serde_json::from_str(&json).unwrap();
    assert_eq!(pokemon.type_names(), vec!["grass", "poison"]);
}

#[test]
fn deserialize_pokemon_null_sprites() {
    let json = load_fixture("missingno.json");
    let pokemon: Pokemon = serde_json::from_str(&json).unwrap();
    assert_eq!(pokemon.primary_image(), None);
    assert_eq!(pokemon.alternate_image(), None);
    assert!(pokemon.types.is_empty());
}

#[test]
fn deserialize_pokemon_without_id() {
    let json = r#"{
        "name": "pikachu",
        "sprites": {"front_default": "f", "back_default": null},
        "types": [{"type": {"name": "electric"}}],
        "stats": [{"base_stat": 55, "stat": {"name": "hp"}}],
        "height": 4,
        "weight": 60
    }"#;
    let pokemon: Pokemon = serde_json::from_str(json).unwrap();
    assert_eq!(pokemon.id, 0);
    assert_eq!(pokemon.alternate_image(), Some("f"));
}
