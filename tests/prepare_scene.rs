use std::fs;
use std::path::{Path, PathBuf};

use gdal::DriverManager;
use gdal::spatial_ref::SpatialRef;

use lsprep::{Error, StationTable, prepare_and_write, prepare_dataset, process_directories};

const SIDECAR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<espa_metadata version="1.2" xmlns="http://espa.cr.usgs.gov/v1.2">
  <global_metadata>
    <satellite>LANDSAT_8</satellite>
    <instrument>OLI_TIRS</instrument>
    <acquisition_date>2014-04-10</acquisition_date>
    <scene_center_time>23:59:60.0000000Z</scene_center_time>
    <lpgs_metadata_file>LC80120312014100032LG_MTL.txt</lpgs_metadata_file>
  </global_metadata>
</espa_metadata>
"#;

fn write_band(path: &Path) {
    let driver = DriverManager::get_driver_by_name("GTiff").expect("GTiff driver");
    let mut ds = driver
        .create_with_band_type::<u8, _>(path, 4, 3, 1)
        .expect("create test raster");
    ds.set_geo_transform(&[350985.0, 30.0, 0.0, 4423215.0, 0.0, -30.0])
        .expect("set geotransform");
    ds.set_spatial_ref(&SpatialRef::from_epsg(32618).expect("EPSG:32618"))
        .expect("set spatial ref");
}

/// Lay out a complete scene directory: ESPA sidecar plus two band rasters
/// sharing one UTM 18N grid.
fn scene_dir(root: &Path) -> PathBuf {
    let dir = root.join("LC80120312014100");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("LC80120312014100.xml"), SIDECAR).unwrap();
    write_band(&dir.join("LC80120312014100LGN00_sr_band1.tif"));
    write_band(&dir.join("LC80120312014100LGN00_cfmask.tif"));
    dir
}

#[test]
fn prepares_a_scene_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let dir = scene_dir(root.path());
    let stations = StationTable::default();

    let sidecar = prepare_and_write(&dir, &stations).unwrap();
    assert_eq!(sidecar, dir.join("agdc-metadata.yaml"));

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&sidecar).unwrap()).unwrap();

    assert_eq!(doc["processing_level"].as_str(), Some("sr_refl"));
    assert_eq!(doc["product_type"].as_str(), Some("LEDAPS"));
    assert_eq!(doc["platform"]["code"].as_str(), Some("LANDSAT_8"));
    assert_eq!(doc["instrument"]["name"].as_str(), Some("OLI_TIRS"));
    assert_eq!(doc["format"]["name"].as_str(), Some("GeoTiff"));

    // year-01-01 plus day-of-year days
    assert_eq!(doc["creation_dt"].as_str(), Some("2014-04-11 00:00:00"));

    // the denormalized leap second folds into the next minute, and the
    // 24-second scene window sits symmetrically around it
    assert_eq!(doc["extent"]["center_dt"].as_str(), Some("2014-04-11 00:00:00"));
    assert_eq!(doc["extent"]["from_dt"].as_str(), Some("2014-04-10 23:59:48"));
    assert_eq!(doc["extent"]["to_dt"].as_str(), Some("2014-04-11 00:00:12"));

    let station = &doc["acquisition"]["groundstation"];
    assert_eq!(station["code"].as_str(), Some("032"));
    assert_eq!(station["name"].as_str(), Some("LGN"));
    assert_eq!(station["aos"].as_str(), doc["extent"]["from_dt"].as_str());
    assert_eq!(station["los"].as_str(), doc["extent"]["to_dt"].as_str());

    // one WRS cell per scene
    let image = &doc["image"];
    assert_eq!(image["satellite_ref_point_start"], image["satellite_ref_point_end"]);
    assert_eq!(image["satellite_ref_point_start"]["path"].as_u64(), Some(12));
    assert_eq!(image["satellite_ref_point_start"]["row"].as_u64(), Some(31));

    let bands = image["bands"].as_mapping().unwrap();
    assert_eq!(bands.len(), 2);
    assert_eq!(
        doc["image"]["bands"]["band1"]["path"].as_str(),
        Some("LC80120312014100LGN00_sr_band1.tif")
    );
    assert_eq!(
        doc["image"]["bands"]["cfmask"]["path"].as_str(),
        Some("LC80120312014100LGN00_cfmask.tif")
    );

    // native corners straight from the raster bounds
    let points = &doc["grid_spatial"]["projection"]["geo_ref_points"];
    assert_eq!(points["ul"]["x"].as_f64(), Some(350985.0));
    assert_eq!(points["ul"]["y"].as_f64(), Some(4423215.0));
    assert_eq!(points["lr"]["x"].as_f64(), Some(350985.0 + 30.0 * 4.0));
    assert_eq!(points["lr"]["y"].as_f64(), Some(4423215.0 - 30.0 * 3.0));
    assert!(
        doc["grid_spatial"]["projection"]["spatial_reference"]
            .as_str()
            .unwrap()
            .contains("UTM zone 18N")
    );

    // geodetic footprint lands in UTM zone 18, west of the central meridian
    for corner in ["ul", "ur", "ll", "lr"] {
        let lon = doc["extent"]["coord"][corner]["lon"].as_f64().unwrap();
        let lat = doc["extent"]["coord"][corner]["lat"].as_f64().unwrap();
        assert!((-78.0..=-76.0).contains(&lon), "{corner} lon {lon}");
        assert!((39.0..=41.0).contains(&lat), "{corner} lat {lat}");
    }

    assert_eq!(
        doc["lineage"]["source_datasets"],
        serde_yaml::Value::Mapping(Default::default())
    );
}

#[test]
fn reruns_differ_only_in_id() {
    let root = tempfile::tempdir().unwrap();
    let dir = scene_dir(root.path());
    let stations = StationTable::default();

    let strip_id = |doc| {
        let mut value = serde_yaml::to_value(&doc).unwrap();
        let id = value
            .as_mapping_mut()
            .unwrap()
            .remove("id")
            .unwrap();
        (id, value)
    };

    let (id_a, a) = strip_id(prepare_dataset(&dir, &stations).unwrap());
    let (id_b, b) = strip_id(prepare_dataset(&dir, &stations).unwrap());

    assert_ne!(id_a, id_b);
    assert_eq!(a, b);
}

#[test]
fn malformed_directory_name_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("not-a-scene");
    fs::create_dir(&dir).unwrap();

    let stations = StationTable::default();
    assert!(matches!(
        prepare_dataset(&dir, &stations),
        Err(Error::Identifier(_))
    ));
}

#[test]
fn missing_sidecar_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("LC80120312014100");
    fs::create_dir(&dir).unwrap();
    write_band(&dir.join("LC80120312014100LGN00_sr_band1.tif"));

    let stations = StationTable::default();
    assert!(matches!(
        prepare_dataset(&dir, &stations),
        Err(Error::Espa(_))
    ));
}

#[test]
fn ambiguous_sidecars_are_fatal() {
    let root = tempfile::tempdir().unwrap();
    let dir = scene_dir(root.path());
    fs::write(dir.join("extra.xml"), SIDECAR).unwrap();

    let stations = StationTable::default();
    assert!(matches!(
        prepare_dataset(&dir, &stations),
        Err(Error::Espa(_))
    ));
}

#[test]
fn band_without_separator_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let dir = scene_dir(root.path());
    fs::write(dir.join("noseparator.tif"), b"").unwrap();

    let stations = StationTable::default();
    assert!(matches!(
        prepare_dataset(&dir, &stations),
        Err(Error::Band(_))
    ));
}

#[test]
fn unknown_ground_station_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let dir = scene_dir(root.path());
    let foreign = SIDECAR.replace(
        "LC80120312014100032LG_MTL.txt",
        "LC80120312014100999LG_MTL.txt",
    );
    fs::write(dir.join("LC80120312014100.xml"), foreign).unwrap();

    let stations = StationTable::default();
    assert!(matches!(
        prepare_dataset(&dir, &stations),
        Err(Error::Station(_))
    ));
}

#[test]
fn batch_runs_continue_past_failures() {
    let root = tempfile::tempdir().unwrap();
    let good = scene_dir(root.path());
    let bad = root.path().join("LT50130312013201");
    fs::create_dir(&bad).unwrap(); // no sidecar, no bands

    let stations = StationTable::default();
    let report = process_directories([&bad, &good], &stations);
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert!(good.join("agdc-metadata.yaml").exists());
    assert!(!bad.join("agdc-metadata.yaml").exists());
}
