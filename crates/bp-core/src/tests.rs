use crate::emit;
use crate::{AssetConfig, BitRaster, BpError, Pixel, PixelRegion, RasterSource};

// ========== Pixel model ==========

#[test]
fn test_pixel_is_white() {
    assert!(Pixel::White.is_white());
    assert!(!Pixel::Ink.is_white());
}

#[test]
fn test_bit_raster_defaults_to_ink() {
    let raster = BitRaster::new(4, 3);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(raster.pixel(x, y), Pixel::Ink);
        }
    }
}

#[test]
fn test_bit_raster_set_and_sample() {
    let mut raster = BitRaster::new(4, 3);
    raster.set(2, 1, Pixel::White);
    assert_eq!(raster.pixel(2, 1), Pixel::White);
    assert_eq!(raster.pixel(1, 2), Pixel::Ink);
    raster.set(2, 1, Pixel::Ink);
    assert_eq!(raster.pixel(2, 1), Pixel::Ink);
}

#[test]
fn test_region_relative_sampling() {
    let mut raster = BitRaster::new(8, 8);
    raster.set(5, 6, Pixel::White);
    let region = PixelRegion::new(&raster, 3, 4, 4, 4);
    assert_eq!(region.pixel(2, 2), Pixel::White);
    assert_eq!(region.pixel(0, 0), Pixel::Ink);
}

#[test]
fn test_region_whole_covers_raster() {
    let raster = BitRaster::new(480, 320);
    let region = PixelRegion::whole(&raster);
    assert_eq!(region.w, 480);
    assert_eq!(region.h, 320);
    assert!(region.in_bounds());
}

#[test]
fn test_region_bounds_check() {
    let raster = BitRaster::new(16, 16);
    assert!(PixelRegion::new(&raster, 0, 0, 16, 16).in_bounds());
    assert!(PixelRegion::new(&raster, 8, 8, 8, 8).in_bounds());
    assert!(!PixelRegion::new(&raster, 8, 8, 9, 8).in_bounds());
    assert!(!PixelRegion::new(&raster, 0, 15, 1, 2).in_bounds());
}

// ========== Config ==========

#[test]
fn test_config_default_regions() {
    let config = AssetConfig::default();
    assert_eq!(config.graphics.regions.len(), 3);
    let tools = &config.graphics.regions[0];
    assert_eq!(tools.name, "Tools");
    assert_eq!((tools.x, tools.y, tools.w, tools.h), (10, 29, 51, 197));
    assert_eq!(config.graphics.icons.len(), 3);
    assert_eq!(config.font.height, 12);
    assert_eq!(config.font.descender, 3);
}

#[test]
fn test_config_json_round_trip() {
    let config = AssetConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back = AssetConfig::from_json(&json).unwrap();
    assert_eq!(back.graphics.source, config.graphics.source);
    assert_eq!(back.graphics.regions.len(), config.graphics.regions.len());
    assert_eq!(back.font.source, config.font.source);
}

#[test]
fn test_config_bad_json_is_serialization_error() {
    let err = AssetConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BpError::Serialization(_)));
}

// ========== Emission helpers ==========

#[test]
fn test_byte_hex_uppercase() {
    assert_eq!(emit::byte_hex(0x00), "0x00");
    assert_eq!(emit::byte_hex(0xA8), "0xA8");
    assert_eq!(emit::byte_hex(0xFF), "0xFF");
    assert_eq!(emit::byte_hex(0x0B), "0x0B");
}

#[test]
fn test_hi_lo_decimal_pairs() {
    assert_eq!(emit::hi_lo(10), "0,10");
    assert_eq!(emit::hi_lo(197), "0,197");
    assert_eq!(emit::hi_lo(401), "1,145");
    assert_eq!(emit::hi_lo(0), "0,0");
}

#[test]
fn test_array_open_close() {
    assert_eq!(
        emit::array_open("pToolsData"),
        "static const uint8_t pToolsData[] PROGMEM =\n{\n"
    );
    assert_eq!(emit::array_close(816), "}; // 816 bytes\n\n");
}

#[test]
fn test_banners() {
    assert_eq!(
        emit::created_from("Icon.png"),
        "// (created from \"Icon.png\")\n"
    );
    assert_eq!(emit::total_annotation(2048), "// total 2048 bytes\n\n");
}

// ========== Errors ==========

#[test]
fn test_error_messages() {
    let err = BpError::MissingMarker { marker: "ENDCHAR" };
    assert_eq!(err.to_string(), "Missing marker: ENDCHAR");
    let err = BpError::RegionOutOfBounds { name: "Tools".into() };
    assert_eq!(err.to_string(), "Region Tools exceeds raster bounds");
}
