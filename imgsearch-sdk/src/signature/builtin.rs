// ABOUTME: Built-in magic byte table as plain (extension, pattern) data
// ABOUTME: Patterns are space separated hex bytes with ?? marking any byte

/// Known file signatures, in declaration order.
///
/// Order only matters between patterns of equal length: the table is sorted
/// longest first, and the first match wins.
pub const BUILTIN_SIGNATURES: &[(&str, &str)] = &[
    // Images
    ("jpg", "FF D8 FF DB"),
    ("jpg", "FF D8 FF E0 00 10 4A 46 49 46 00 01"),
    ("jpg", "FF D8 FF E0"),
    ("jpg", "FF D8 FF E1 ?? ?? 45 78 69 66 00 00"),
    ("jpg", "FF D8 FF E1"),
    ("jpg", "FF D8 FF EE"),
    ("png", "89 50 4E 47 0D 0A 1A 0A"),
    ("gif", "47 49 46 38 37 61"),
    ("gif", "47 49 46 38 39 61"),
    ("bmp", "42 4D"),
    ("tif", "49 49 2A 00"),
    ("tif", "4D 4D 00 2A"),
    ("cr2", "49 49 2A 00 10 00 00 00 43 52"),
    ("ico", "00 00 01 00"),
    ("webp", "52 49 46 46 ?? ?? ?? ?? 57 45 42 50"),
    ("heic", "?? ?? ?? ?? 66 74 79 70 68 65 69 63"),
    ("avif", "?? ?? ?? ?? 66 74 79 70 61 76 69 66"),
    ("psd", "38 42 50 53"),
    // Audio and video
    ("wav", "52 49 46 46 ?? ?? ?? ?? 57 41 56 45"),
    ("avi", "52 49 46 46 ?? ?? ?? ?? 41 56 49 20"),
    ("mp4", "?? ?? ?? ?? 66 74 79 70 69 73 6F 6D"),
    ("mp4", "?? ?? ?? ?? 66 74 79 70 4D 53 4E 56"),
    ("mov", "?? ?? ?? ?? 66 74 79 70 71 74 20 20"),
    ("mkv", "1A 45 DF A3"),
    ("mp3", "49 44 33"),
    ("mp3", "FF FB"),
    ("mp3", "FF F3"),
    ("mp3", "FF F2"),
    ("flac", "66 4C 61 43"),
    ("ogg", "4F 67 67 53"),
    ("mid", "4D 54 68 64"),
    // Generic RIFF container, shadowed by the specific RIFF formats above
    ("riff", "52 49 46 46"),
    // Archives
    ("zip", "50 4B 03 04"),
    ("zip", "50 4B 05 06"),
    ("zip", "50 4B 07 08"),
    ("rar", "52 61 72 21 1A 07 01 00"),
    ("rar", "52 61 72 21 1A 07 00"),
    ("7z", "37 7A BC AF 27 1C"),
    ("gz", "1F 8B"),
    ("bz2", "42 5A 68"),
    ("xz", "FD 37 7A 58 5A 00"),
    ("zst", "28 B5 2F FD"),
    ("cab", "4D 53 43 46"),
    // Documents
    ("pdf", "25 50 44 46 2D"),
    ("ps", "25 21 50 53"),
    ("rtf", "7B 5C 72 74 66 31"),
    ("doc", "D0 CF 11 E0 A1 B1 1A E1"),
    ("sqlite", "53 51 4C 69 74 65 20 66 6F 72 6D 61 74 20 33 00"),
    // Executables
    ("exe", "4D 5A"),
    ("elf", "7F 45 4C 46"),
    ("class", "CA FE BA BE"),
    ("wasm", "00 61 73 6D"),
    ("swf", "46 57 53"),
    ("swf", "43 57 53"),
];
