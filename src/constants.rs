// Page wiring and UI timing constants for the web frontend.

// Scene elements
pub const MODEL_ELEMENT_ID: &str = "plantModel"; // A-Frame entity that receives the transform
pub const PROFILE_ATTRIBUTE: &str = "data-profile"; // on <body>: marker | nft | simple

// Overlays
pub const INFO_PANEL_ID: &str = "infoPanel";
pub const FLOATING_INFO_ID: &str = "floatingInfo";
pub const TOUCH_HINT_ID: &str = "touchHint";
pub const SCAN_HINT_ID: &str = "scanHint";
pub const LOADER_SELECTOR: &str = ".arjs-loader";

// Buttons
pub const INFO_BUTTON_SELECTOR: &str = ".info-icon";
pub const ROTATE_BUTTON_SELECTOR: &str = ".rotate-icon";
pub const SCALE_BUTTON_SELECTOR: &str = ".scale-icon";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-wrapper";

// Scale button icon classes
pub const ICON_EXPAND: &str = "fa-solid fa-expand";
pub const ICON_COMPRESS: &str = "fa-solid fa-compress";

// Panel text targets
pub const PANEL_TITLE_ID: &str = "plantTitle";
pub const PANEL_ENGLISH_ID: &str = "plantEnglish";
pub const PANEL_CATEGORY_ID: &str = "plantCategory";
pub const PANEL_DESCRIPTION_ID: &str = "plantDescription";
pub const PANEL_FAMILY_ID: &str = "specFamily";
pub const PANEL_ORIGIN_ID: &str = "specOrigin";
pub const PANEL_FEATURE_ID: &str = "specFeature";
pub const PANEL_FUN_FACT_ID: &str = "funFactText";

// Floating card text targets
pub const FLOAT_TITLE_ID: &str = "floatTitle";
pub const FLOAT_ENGLISH_ID: &str = "floatEnglish";
pub const FLOAT_FAMILY_ID: &str = "floatFamilyValue";
pub const FLOAT_ORIGIN_ID: &str = "floatOriginValue";
pub const FLOAT_CATEGORY_ID: &str = "floatCategoryValue";
pub const FLOAT_FEATURE_ID: &str = "floatFeatureValue";
pub const FLOAT_FUN_FACT_ID: &str = "floatFunFactText"; // unprefixed, unlike the panel

pub const PANEL_EMPTY_SPEC: &str = "--";
pub const FUN_FACT_PREFIX: &str = "💡 ";

// Timing (milliseconds)
pub const PANEL_SHOW_DELAY_MS: i32 = 50; // let display:block land before the transition class
pub const PANEL_HIDE_DELAY_MS: i32 = 300; // matches the CSS fade-out
pub const BUTTON_PULSE_MS: i32 = 300;
pub const TOUCH_HINT_MS: i32 = 5000;
pub const LOADER_DELAY_MS: i32 = 1000;
pub const LOADER_FADE_MS: i32 = 500;

// Frame loop: longest frame gap still treated as continuous (tab switches produce huge gaps)
pub const MAX_FRAME_DT_MS: f64 = 250.0;
