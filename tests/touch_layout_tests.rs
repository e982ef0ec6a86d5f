//! End-to-end tests for `syllabigen touch-layout`.

use std::fs;
use std::process::Command;

use serde_json::Value;

/// Path to the syllabigen binary
fn syllabigen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_syllabigen")
}

fn generate(args: &[&str]) -> Vec<u8> {
    let output = Command::new(syllabigen_bin())
        .arg("touch-layout")
        .args(args)
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output.stdout
}

fn generate_json(args: &[&str]) -> Value {
    serde_json::from_slice(&generate(args)).expect("Output should be valid JSON")
}

fn layer<'a>(layout: &'a Value, id: &str) -> &'a Value {
    layout["phone"]["layer"]
        .as_array()
        .unwrap()
        .iter()
        .find(|layer| layer["id"] == id)
        .unwrap_or_else(|| panic!("no layer named {id}"))
}

fn keys(layer: &Value) -> Vec<&Value> {
    layer["row"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row["key"].as_array().unwrap())
        .collect()
}

fn key_by_id<'a>(layer: &'a Value, id: &str) -> &'a Value {
    keys(layer)
        .into_iter()
        .find(|key| key["id"] == id)
        .unwrap_or_else(|| panic!("no key with id {id}"))
}

#[test]
fn test_writes_the_layout_document() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("nrc_crk_cans.keyman-touch-layout");

    let output = Command::new(syllabigen_bin())
        .args(["touch-layout", out_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "file output should not echo");

    let written = fs::read_to_string(&out_path).expect("Failed to read output");
    let layout: Value = serde_json::from_str(&written).expect("Output should be valid JSON");
    assert!(written.ends_with('\n'));
    assert_eq!(
        layout["phone"]["font"],
        "Noto Sans, Gadugi, Euphemia, Euphemia UCAS, Tahoma, sans-serif"
    );
    assert_eq!(layout["phone"]["displayUnderlying"], Value::Bool(false));
    assert_eq!(layout["phone"]["layer"].as_array().unwrap().len(), 19);
}

#[test]
fn test_stdout_matches_the_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("layout.keyman-touch-layout");

    let stdout = generate(&[]);
    let output = Command::new(syllabigen_bin())
        .args(["touch-layout", out_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let written = fs::read(&out_path).expect("Failed to read output");
    assert_eq!(stdout, written);
}

#[test]
fn test_regeneration_is_byte_identical() {
    let first = generate(&[]);
    let second = generate(&[]);
    assert_eq!(first, second);

    let first_latin = generate(&["--with-latin"]);
    let second_latin = generate(&["--with-latin"]);
    assert_eq!(first_latin, second_latin);
}

#[test]
fn test_layer_inventory() {
    let layout = generate_json(&[]);
    let ids: Vec<&str> = layout["phone"]["layer"]
        .as_array()
        .unwrap()
        .iter()
        .map(|layer| layer["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "default", "wV", "pV", "pwV", "tV", "twV", "kV", "kwV", "cV", "cwV", "mV", "mwV",
            "nV", "nwV", "sV", "swV", "yV", "ywV", "numeric",
        ]
    );
}

#[test]
fn test_with_latin_appends_the_latin_pair() {
    let layout = generate_json(&["--with-latin"]);
    let ids: Vec<&str> = layout["phone"]["layer"]
        .as_array()
        .unwrap()
        .iter()
        .map(|layer| layer["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 21);
    assert_eq!(&ids[18..], ["numeric", "latin", "shift"]);

    let switch = key_by_id(layer(&layout, "default"), "K_UPPER");
    assert_eq!(switch["text"], "*ABC*");
    assert_eq!(switch["nextlayer"], "latin");
}

#[test]
fn test_latin_switch_is_inert_by_default() {
    let layout = generate_json(&[]);
    let switch = key_by_id(layer(&layout, "default"), "K_UPPER");
    assert_eq!(switch["text"], "");
    assert_eq!(switch["sp"], "10");
    assert!(switch.get("nextlayer").is_none());

    let numeric_switch = key_by_id(layer(&layout, "numeric"), "K_LOWER");
    assert_eq!(numeric_switch["text"], "");
    assert_eq!(numeric_switch["sp"], "10");
}

#[test]
fn test_vowel_keys_compose_on_consonant_layers() {
    let layout = generate_json(&[]);

    let composed = key_by_id(layer(&layout, "kV"), "U_1472");
    assert_eq!(composed["text"], "ᑲ");
    assert_eq!(composed["sp"], "2");
    assert_eq!(composed["nextlayer"], "default");

    let base_vowel = key_by_id(layer(&layout, "default"), "U_140A");
    assert_eq!(base_vowel["text"], "ᐊ");
    assert!(base_vowel.get("sp").is_none());
    assert_eq!(base_vowel["nextlayer"], "default");
}

#[test]
fn test_nasal_glide_gaps_render_blank() {
    let layout = generate_json(&[]);
    let blanks: Vec<&Value> = keys(layer(&layout, "nwV"))
        .into_iter()
        .filter(|key| key["sp"] == "9")
        .collect();
    // nwi, nwî, nwo, and nwô do not exist in the syllabary.
    assert_eq!(blanks.len(), 4);
    for blank in blanks {
        assert_eq!(blank["id"], "");
        assert_eq!(blank["text"], "");
        assert!(blank.get("nextlayer").is_none());
    }
}

#[test]
fn test_erase_key_unwinds_composition() {
    let layout = generate_json(&[]);

    let on_base = key_by_id(layer(&layout, "default"), "K_BKSP");
    assert!(on_base.get("nextlayer").is_none());

    let on_consonant = key_by_id(layer(&layout, "kV"), "K_BKSP");
    assert_eq!(on_consonant["nextlayer"], "default");

    let on_glide = key_by_id(layer(&layout, "wV"), "K_BKSP");
    assert_eq!(on_glide["nextlayer"], "default");

    let on_labialized = key_by_id(layer(&layout, "kwV"), "K_BKSP");
    assert_eq!(on_labialized["nextlayer"], "kV");
}

#[test]
fn test_widths_serialize_as_strings() {
    let layout = generate_json(&[]);
    let base = layer(&layout, "default");

    let space = key_by_id(base, "K_SPACE");
    assert_eq!(space["width"], Value::String("445".to_string()));

    let nnbsp = key_by_id(base, "U_202F");
    assert_eq!(nnbsp["width"], Value::String("215".to_string()));
}

#[test]
fn test_punctuation_key_offers_latin_marks() {
    let layout = generate_json(&[]);
    let period = key_by_id(layer(&layout, "default"), "U_166E");
    assert_eq!(period["text"], "᙮");
    let pop_up: Vec<&str> = period["sk"]
        .as_array()
        .unwrap()
        .iter()
        .map(|sub| sub["text"].as_str().unwrap())
        .collect();
    assert_eq!(pop_up, [",", ".", "\"", "?", "!"]);
}

#[test]
fn test_duplicate_table_entry_aborts() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let table_path = dir.path().join("duplicated.tsv");
    fs::write(
        &table_path,
        "cans\tlatn\tscalar.value\nᑲ\tka\t5234\nᑳ\tka\t5235\n",
    )
    .expect("Failed to write table");
    let out_path = dir.path().join("layout.keyman-touch-layout");

    let output = Command::new(syllabigen_bin())
        .args([
            "touch-layout",
            out_path.to_str().unwrap(),
            "--table",
            table_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("duplicate table entry"),
        "stderr was: {stderr}"
    );
    assert!(!out_path.exists(), "no output should be written");
}

#[test]
fn test_incomplete_table_aborts() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let table_path = dir.path().join("truncated.tsv");
    // Finals and bare vowels only: the glide layers cannot resolve.
    let mut tsv = String::from("cans\tlatn\tscalar.value\n");
    tsv.push_str("ᐁ\tê\t5121\nᐃ\ti\t5123\nᐄ\tî\t5124\nᐅ\to\t5125\n");
    tsv.push_str("ᐆ\tô\t5126\nᐊ\ta\t5130\nᐋ\tâ\t5131\n");
    tsv.push_str("ᑊ\tp\t5194\nᐟ\tt\t5151\nᐠ\tk\t5152\nᐨ\tc\t5160\n");
    tsv.push_str("ᒼ\tm\t5308\nᐣ\tn\t5155\nᐢ\ts\t5154\nᕀ\ty\t5440\n");
    tsv.push_str("ᐤ\tw\t5156\nᐦ\th\t5158\nᕽ\thk\t5501\nᓬ\tl\t5356\nᕒ\tr\t5458\n");
    fs::write(&table_path, tsv).expect("Failed to write table");
    let out_path = dir.path().join("layout.keyman-touch-layout");

    let output = Command::new(syllabigen_bin())
        .args([
            "touch-layout",
            out_path.to_str().unwrap(),
            "--table",
            table_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unreachable state"), "stderr was: {stderr}");
    assert!(!out_path.exists(), "no output should be written");
}
