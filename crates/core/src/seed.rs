//! Embedded fallback data.
//!
//! The public site must never render an empty catalog or brand grid just
//! because the remote store is unreachable or not yet seeded, so every
//! hydrated collection has a compiled-in default. The CLI pushes the
//! same data into the remote store when bootstrapping an environment.

use crate::types::{Brand, CatalogItem, ContactSettings, GalleryPhoto, HeroSettings, SpecMap};

fn catalog_item(
    id: i64,
    name: &str,
    category: &str,
    kind: &str,
    amperage: i64,
    description: &str,
) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        kind: kind.to_string(),
        amperage,
        description: description.to_string(),
        image_url: None,
        specifications: SpecMap::new(),
        created_at: None,
    }
}

/// The default rental catalog shown until the remote store answers.
#[must_use]
pub fn rental_catalog() -> Vec<CatalogItem> {
    vec![
        catalog_item(
            1,
            "MIG/MAG 250A - Internal Feeder",
            "MIG/MAG",
            "Internal",
            250,
            "Compact MIG/MAG welder with a built-in wire feeder, suited to light and medium work.",
        ),
        catalog_item(
            2,
            "MIG/MAG 400A - External Feeder",
            "MIG/MAG",
            "External",
            400,
            "Industrial MIG/MAG power source with a separate wire feeder for extra reach.",
        ),
        catalog_item(
            3,
            "TIG AC/DC 200A",
            "TIG",
            "Inverter",
            200,
            "High-precision TIG unit for aluminium (AC) and other metals (DC).",
        ),
        catalog_item(
            4,
            "Welding Rectifier 400A",
            "Electrode",
            "Rectifier",
            400,
            "Versatile power source for covered-electrode welding in industrial duty.",
        ),
        catalog_item(
            5,
            "Plasma Cutting Source 100A",
            "Cutting",
            "Plasma",
            100,
            "Precision plasma source for cutting conductive metals.",
        ),
        catalog_item(
            6,
            "Track Cutting Carriage",
            "Cutting",
            "Mechanized",
            0,
            "Portable oxy-fuel carriage for automatic straight-line and circle cuts.",
        ),
        catalog_item(
            7,
            "20 CFM Piston Compressor",
            "Compressed Air",
            "Compressor",
            0,
            "Rugged compressed-air unit for industrial applications and pneumatic tools.",
        ),
    ]
}

fn brand(id: i64, name: &str, url: &str, slug: &str) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        url: url.to_string(),
        logo_url: Some(format!("/static/images/brands/{slug}.jpg")),
    }
}

/// Manufacturers whose equipment the workshop is authorized to service.
#[must_use]
pub fn assistance_brands() -> Vec<Brand> {
    vec![
        brand(1, "ABICOR BINZEL", "https://www.binzel-abicor.com", "binzel"),
        brand(2, "BALMER", "https://www.balmer.com.br", "balmer"),
        brand(3, "BAMBOZZI", "https://www.bambozzi.com.br", "bambozzi"),
        brand(4, "BAND", "https://www.bandequipamentos.com.br", "band"),
        brand(5, "BOXER", "https://www.boxersoldas.com.br", "boxer"),
        brand(6, "CARBOGRAFITE", "https://www.carbografite.com.br", "carbografite"),
        brand(7, "CEA", "https://www.ceabrasil.com.br", "cea"),
        brand(8, "CHIAPERINI", "https://www.chiaperini.com.br", "chiaperini"),
        brand(9, "DENVER", "https://www.denversoldas.com.br", "denver"),
        brand(10, "ESAB", "https://www.esab.com.br", "esab"),
        brand(11, "EUTECTIC CASTOLIN", "https://www.eutectic.com.br", "eutectic"),
        brand(12, "FLACH", "https://www.flachcarregadores.com.br", "flach"),
        brand(13, "HSOLDAS", "https://hsoldas.com.br", "hsoldas"),
        brand(14, "INGCO", "https://www.ingco.com.br", "ingco"),
        brand(15, "KENDE", "https://www.kendebrasil.com.br", "kende"),
        brand(16, "LINCOLN ELECTRIC", "https://www.lincolnelectric.com.br", "lincoln"),
        brand(17, "LYNUS", "https://www.lynus.com.br", "lynus"),
        brand(18, "SM INDUSTRIA", "https://www.smindustria.com.br", "sm-industria"),
        brand(19, "STARMIG", "https://starmig.com", "starmig"),
        brand(20, "STARWELD", "https://www.starweld.com.br", "starweld"),
        brand(21, "TBI", "https://www.tbi-industries.com", "tbi"),
        brand(22, "TECHTO", "https://www.techto.com.br", "techto"),
        brand(23, "THERMACUT", "https://thermacut.com", "thermacut"),
        brand(24, "V8 BRASIL", "https://www.v8brasil.com.br", "v8-brasil"),
        brand(25, "VONDER", "https://www.vonder.com.br", "vonder"),
        brand(26, "WHITE MARTINS", "https://www.whitemartins.com.br", "white-martins"),
    ]
}

/// Workshop photos bundled with the site, used both as the gallery
/// fallback and by the one-shot gallery seeding action. Paths are
/// relative to the static asset prefix.
pub const INITIAL_GALLERY_PATHS: &[&str] = &[
    "/static/images/workshop/bay-overview.jpg",
    "/static/images/workshop/mig-bench.jpg",
    "/static/images/workshop/tig-repair.jpg",
    "/static/images/workshop/plasma-table.jpg",
    "/static/images/workshop/calibration-rig.jpg",
    "/static/images/workshop/parts-wall.jpg",
    "/static/images/workshop/delivery-fleet.jpg",
    "/static/images/workshop/team.jpg",
];

/// Gallery fallback rows derived from the bundled photos.
#[must_use]
pub fn gallery_photos() -> Vec<GalleryPhoto> {
    INITIAL_GALLERY_PATHS
        .iter()
        .enumerate()
        .map(|(index, path)| GalleryPhoto {
            id: index as i64 + 1,
            url: (*path).to_string(),
            created_at: None,
        })
        .collect()
}

/// Hero copy shown until the `hero` settings row exists.
#[must_use]
pub fn default_hero() -> HeroSettings {
    HeroSettings {
        title: "Welding equipment,<br />ready when you are".to_string(),
        subtitle: "Rental, maintenance and authorized service for MIG/MAG, TIG, \
                   electrode and plasma equipment - with preventive maintenance \
                   included in every rental."
            .to_string(),
        video_url: "https://www.youtube.com/embed/arcline-workshop".to_string(),
        primary_button_text: "Browse the catalog".to_string(),
        primary_button_link: "/rental".to_string(),
        secondary_button_text: "Authorized service".to_string(),
        secondary_button_link: "/assistance".to_string(),
    }
}

/// Contact details shown until the `contact` settings row exists.
#[must_use]
pub fn default_contact() -> ContactSettings {
    ContactSettings {
        whatsapp: "551134567890".to_string(),
        whatsapp_display: "(11) 3456-7890".to_string(),
        email: "rental@arcline.example".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_seed_has_seven_items_with_unique_ids() {
        let items = rental_catalog();
        assert_eq!(items.len(), 7);
        let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn unrated_items_use_zero_amperage() {
        let items = rental_catalog();
        let unrated: Vec<_> = items.iter().filter(|i| i.amperage == 0).collect();
        assert_eq!(unrated.len(), 2);
    }

    #[test]
    fn brand_seed_is_sorted_by_name() {
        let brands = assistance_brands();
        assert_eq!(brands.len(), 26);
        let mut names: Vec<_> = brands.iter().map(|b| b.name.clone()).collect();
        names.sort();
        assert_eq!(
            names,
            brands.iter().map(|b| b.name.clone()).collect::<Vec<_>>()
        );
    }
}
