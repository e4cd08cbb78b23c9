use crate::catalog::domain::{Coordinates, Project, ProjectStatus};

struct DemoSeed {
    ref_code: &'static str,
    name: &'static str,
    location: &'static str,
    status: ProjectStatus,
    floors: &'static str,
    units: &'static str,
    size: &'static str,
    community: &'static str,
    province: &'static str,
    business_type: &'static str,
    regime: &'static str,
    lat: f64,
    lng: f64,
}

const DEMO_SEEDS: &[DemoSeed] = &[
    DemoSeed {
        ref_code: "2104",
        name: "Residencial Aurora",
        location: "Getafe",
        status: ProjectStatus::EnConstruccion,
        floors: "6",
        units: "84",
        size: "Grande",
        community: "Madrid",
        province: "Madrid",
        business_type: "BTR",
        regime: "Alquiler",
        lat: 40.3083,
        lng: -3.7327,
    },
    DemoSeed {
        ref_code: "2098",
        name: "Mirador del Guadalquivir",
        location: "Sevilla",
        status: ProjectStatus::EnProyecto,
        floors: "8",
        units: "120",
        size: "Grande",
        community: "Andalucía",
        province: "Sevilla",
        business_type: "BTS",
        regime: "Venta",
        lat: 37.3826,
        lng: -5.9963,
    },
    DemoSeed {
        ref_code: "2095",
        name: "Jardins de Llevant",
        location: "Badalona",
        status: ProjectStatus::Completado,
        floors: "5",
        units: "48",
        size: "Mediana",
        community: "Cataluña",
        province: "Barcelona",
        business_type: "BTS",
        regime: "VPO",
        lat: 41.4469,
        lng: 2.2450,
    },
    DemoSeed {
        ref_code: "2090",
        name: "Torre Abando",
        location: "Bilbao",
        status: ProjectStatus::Concurso,
        floors: "12",
        units: "96",
        size: "Grande",
        community: "País Vasco",
        province: "Bizkaia",
        business_type: "BTR",
        regime: "Alquiler",
        lat: 43.2603,
        lng: -2.9334,
    },
    DemoSeed {
        ref_code: "2087",
        name: "Las Encinas II",
        location: "Boadilla del Monte",
        status: ProjectStatus::Completado,
        floors: "3",
        units: "22",
        size: "Pequeña",
        community: "Madrid",
        province: "Madrid",
        business_type: "BTS",
        regime: "Venta",
        lat: 40.4069,
        lng: -3.8750,
    },
    DemoSeed {
        ref_code: "2081",
        name: "Residencial Turia",
        location: "Valencia",
        status: ProjectStatus::EnProyecto,
        floors: "-",
        units: "-",
        size: "Mediana",
        community: "Comunidad Valenciana",
        province: "Valencia",
        business_type: "Coliving",
        regime: "Alquiler",
        lat: 39.4699,
        lng: -0.3763,
    },
];

/// Bundled dataset used when no backend is configured, so the service
/// and the CLI work out of the box.
pub fn demo_projects() -> Vec<Project> {
    DEMO_SEEDS
        .iter()
        .map(|seed| {
            let mut project = Project::bare(seed.ref_code, seed.name, seed.location, seed.status);
            project.floors = seed.floors.to_string();
            project.units = seed.units.to_string();
            project.size = seed.size.to_string();
            project.community = seed.community.to_string();
            project.province = seed.province.to_string();
            project.business_type = seed.business_type.to_string();
            project.regime = seed.regime.to_string();
            project.coordinates = Coordinates {
                lat: seed.lat,
                lng: seed.lng,
            };
            project
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_refs_are_unique_and_numeric() {
        let projects = demo_projects();
        let mut refs: Vec<&str> = projects.iter().map(|p| p.ref_code.as_str()).collect();
        refs.sort();
        refs.dedup();
        assert_eq!(refs.len(), projects.len());
        assert!(projects
            .iter()
            .all(|p| p.ref_code.parse::<i64>().is_ok()));
    }

    #[test]
    fn demo_covers_every_status() {
        let projects = demo_projects();
        for status in crate::catalog::domain::ProjectStatus::ordered() {
            assert!(projects.iter().any(|p| p.status == status));
        }
    }
}
