mod species_0001_to_0050;
mod species_0051_to_0100;
mod species_0101_to_0150;
mod species_0151_to_0200;
mod species_0201_to_0250;
mod species_0251_to_0300;
mod species_0301_to_0350;
mod species_0351_to_0400;
mod species_0401_to_0450;
mod species_0451_to_0500;
mod species_0501_to_0550;
mod species_0551_to_0600;
mod species_0601_to_0650;
mod species_0651_to_0700;
mod species_0701_to_0750;
mod species_0751_to_0800;
mod species_0801_to_0850;
mod species_0851_to_0900;
mod species_0901_to_0950;
mod species_0951_to_1000;
mod species_1001_to_1050;

use ahash::HashMap;
use once_cell::sync::Lazy;

use crate::{
    Id,
    SpeciesData,
};

/// A table of species data, keyed by species ID.
pub type SpeciesTable = HashMap<Id, SpeciesData>;

static SPECIES: Lazy<SpeciesTable> = Lazy::new(build_species_table);

/// All species data known to this crate, keyed by species ID.
///
/// The table is built once, on first access, by merging every range table in ascending range
/// order. It is never mutated afterwards, so it is safe to read from any thread without
/// synchronization.
pub fn species_table() -> &'static SpeciesTable {
    &SPECIES
}

fn range_tables() -> [fn() -> SpeciesTable; 21] {
    [
        species_0001_to_0050::table,
        species_0051_to_0100::table,
        species_0101_to_0150::table,
        species_0151_to_0200::table,
        species_0201_to_0250::table,
        species_0251_to_0300::table,
        species_0301_to_0350::table,
        species_0351_to_0400::table,
        species_0401_to_0450::table,
        species_0451_to_0500::table,
        species_0501_to_0550::table,
        species_0551_to_0600::table,
        species_0601_to_0650::table,
        species_0651_to_0700::table,
        species_0701_to_0750::table,
        species_0751_to_0800::table,
        species_0801_to_0850::table,
        species_0851_to_0900::table,
        species_0901_to_0950::table,
        species_0951_to_1000::table,
        species_1001_to_1050::table,
    ]
}

fn build_species_table() -> SpeciesTable {
    let mut table = SpeciesTable::default();
    for range in range_tables() {
        merge_range(&mut table, range());
    }
    table
}

/// Merges one range table into the aggregate table.
///
/// The merge is last-write-wins: on an ID collision across ranges, the incoming entry replaces
/// the existing one. Collisions are reported, since a species defined in two range tables is
/// almost certainly a data entry mistake.
fn merge_range(table: &mut SpeciesTable, range: SpeciesTable) {
    for (id, species) in range {
        if table.insert(id.clone(), species).is_some() {
            log::warn!("species {id} is defined in multiple range tables; the later entry wins");
        }
    }
}

#[cfg(test)]
mod species_table_test {
    use pretty_assertions::assert_eq;

    use crate::{
        AbilitySlots,
        Color,
        Gender,
        Id,
        SpeciesData,
        StatTable,
        Type,
        dex::{
            build_species_table,
            range_tables,
        },
        species_table,
    };

    #[test]
    fn contains_every_range_table_entry() {
        for range in range_tables() {
            for (id, _) in range() {
                assert!(
                    species_table().contains_key(&id),
                    "{id} is missing from the aggregate table",
                );
            }
        }
    }

    #[test]
    fn no_larger_than_the_sum_of_all_range_tables() {
        let sum = range_tables()
            .iter()
            .map(|range| range().len())
            .sum::<usize>();
        assert!(species_table().len() <= sum);
    }

    #[test]
    fn base_species_resolve_to_real_entries() {
        for (id, species) in species_table() {
            if let Some(base_species) = &species.base_species {
                assert!(
                    species_table().contains_key(base_species),
                    "{id} references unknown base species {base_species}",
                );
            }
        }
    }

    #[test]
    fn formes_share_their_base_species_number() {
        for (id, species) in species_table() {
            if let Some(base_species) = &species.base_species {
                let base_species = &species_table()[base_species];
                assert_eq!(species.num, base_species.num, "{id}");
            }
        }
    }

    #[test]
    fn every_stat_block_is_fully_populated() {
        for (id, species) in species_table() {
            assert!(
                species.base_stats.values().all(|value| value > 0),
                "{id} has an empty stat",
            );
        }
    }

    #[test]
    fn rebuilding_produces_an_identical_table() {
        assert_eq!(build_species_table(), build_species_table());
    }

    #[test]
    fn looks_up_bulbasaur() {
        assert_eq!(
            species_table().get(&Id::from("bulbasaur")),
            Some(&SpeciesData {
                name: "Bulbasaur".to_owned(),
                num: 1,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 49,
                    def: 49,
                    spa: 65,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from("overgrow")),
                    hidden: Some(Id::from("chlorophyll")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 6.9,
                color: Color::Green,
                ..Default::default()
            }),
        );
    }

    #[test]
    fn looks_up_gholdengo() {
        let species = species_table()
            .get(&Id::from("gholdengo"))
            .expect("gholdengo should exist");
        assert_eq!(species.name, "Gholdengo");
        assert_eq!(species.num, 1000);
        assert_eq!(species.types(), (Type::Steel, Some(Type::Ghost)));
        assert_eq!(species.gender, Some(Gender::Unknown));
        assert_eq!(
            species.base_stats,
            StatTable {
                hp: 87,
                atk: 60,
                def: 95,
                spa: 133,
                spd: 91,
                spe: 84,
            },
        );
        assert_eq!(species.abilities.primary, Some(Id::from("goodasgold")));
        assert_eq!(species.prevo, Some(Id::from("gimmighoul")));
    }

    #[test]
    fn looks_up_mega_venusaur_forme() {
        let species = species_table()
            .get(&Id::from("venusaurmega"))
            .expect("venusaurmega should exist");
        assert_eq!(species.base_species, Some(Id::from("venusaur")));
        assert_eq!(species.forme, Some("Mega".to_owned()));
        assert_eq!(species.bst(), 625);
        assert_eq!(species.display_name(), "Venusaur (Mega)");
    }
}
