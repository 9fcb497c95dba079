use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::chart::{ChartGenerator, ChartRenderer, PlatformEmojis};
use crate::{App, Config, Version};

fn platforms(names: &[&str]) -> Vec<String> {
    names.iter().map(|p| p.to_string()).collect()
}

fn sample_apps() -> Vec<App> {
    let mut app1 = App::new(
        "app1",
        "Test app 1 description",
        Version::new("v1.0", platforms(&["darwin_arm64", "darwin_amd64"])),
    );
    app1.versions
        .push(Version::new("v2.0", platforms(&["darwin_arm64"])));

    let app2 = App::new(
        "app2",
        "Test app 2 description",
        Version::new("v1.0", platforms(&["darwin_amd64"])),
    );

    vec![app1, app2]
}

#[test]
fn test_render_document() {
    let markdown = ChartRenderer::new(Config::default()).render(&sample_apps());

    let expected = "\
## 🖥️ app1
<small style=\"color:lightblue;\">Test app 1 description</small>
<details>
<summary>📦 Versions</summary>
<ul>
<li>🏷️ v1.0
<ul>
<li>🍎 darwin_arm64</li>
<li>🍏 darwin_amd64</li>
</ul>
</li>
<li>🏷️ v2.0
<ul>
<li>🍎 darwin_arm64</li>
</ul>
</li>
</ul>
</details>

## 🖥️ app2
<small style=\"color:lightblue;\">Test app 2 description</small>
<details>
<summary>📦 Versions</summary>
<ul>
<li>🏷️ v1.0
<ul>
<li>🍏 darwin_amd64</li>
</ul>
</li>
</ul>
</details>

";
    assert_eq!(markdown, expected);
}

#[test]
fn test_render_empty() {
    let markdown = ChartRenderer::new(Config::default()).render(&[]);
    assert_eq!(markdown, "");
}

#[test]
fn test_render_version_without_platforms() {
    let apps = vec![App::new("bare", "", Version::new("0.1", Vec::new()))];

    let markdown = ChartRenderer::new(Config::default()).render(&apps);

    assert!(markdown.contains("<li>🏷️ 0.1</li>\n"));
    assert!(!markdown.contains("<ul>\n<ul>"));
    assert!(markdown.contains("<small style=\"color:lightblue;\"></small>\n"));
}

#[test]
fn test_render_same_platform_same_emoji_across_apps() {
    let apps = vec![
        App::new("a", "", Version::new("1", platforms(&["linux_amd64", "windows_amd64"]))),
        App::new("b", "", Version::new("1", platforms(&["freebsd_amd64", "linux_amd64"]))),
        App::new("c", "", Version::new("1", platforms(&["windows_amd64"]))),
    ];

    let markdown = ChartRenderer::new(Config::default()).render(&apps);

    assert_eq!(markdown.matches("<li>🍎 linux_amd64</li>").count(), 2);
    assert_eq!(markdown.matches("<li>🍏 windows_amd64</li>").count(), 2);
    assert_eq!(markdown.matches("<li>🍊 freebsd_amd64</li>").count(), 1);
}

#[test]
fn test_render_palette_exhausted() {
    let config = Config {
        palette: vec!["🔴".to_string(), "🔵".to_string()],
        fallback_emoji: "❓".to_string(),
        ..Config::default()
    };
    let apps = vec![App::new(
        "many",
        "",
        Version::new("1", platforms(&["a", "b", "c", "d", "a"])),
    )];

    let markdown = ChartRenderer::new(config).render(&apps);

    assert!(markdown.contains("<li>🔴 a</li>"));
    assert!(markdown.contains("<li>🔵 b</li>"));
    assert!(markdown.contains("<li>❓ c</li>"));
    assert!(markdown.contains("<li>❓ d</li>"));
    assert_eq!(markdown.matches("<li>🔴 a</li>").count(), 2);
}

#[test]
fn test_emojis_first_seen_order() {
    let mut emojis = PlatformEmojis::new(platforms(&["1️⃣", "2️⃣"]), "🔁");

    assert_eq!(emojis.emoji_for("x"), "1️⃣");
    assert_eq!(emojis.emoji_for("y"), "2️⃣");
    assert_eq!(emojis.emoji_for("x"), "1️⃣");
    assert_eq!(emojis.emoji_for("z"), "🔁");
    assert_eq!(emojis.emoji_for("y"), "2️⃣");
    assert_eq!(emojis.emoji_for("w"), "🔁");
}

#[test]
fn test_emojis_empty_palette() {
    let mut emojis = PlatformEmojis::new(Vec::new(), "💻");

    assert_eq!(emojis.emoji_for("linux_amd64"), "💻");
    assert_eq!(emojis.emoji_for("darwin_arm64"), "💻");
}

#[test]
fn test_generate() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path();

    let manifests = [
        ("app2", "v1.0", "description: Test app 2 description\nplatforms:\n  darwin_amd64:\n"),
        ("app1", "v2.0", "description: Test app 1 description\nplatforms:\n  darwin_arm64:\n"),
        (
            "app1",
            "v1.0",
            "description: Test app 1 description\nplatforms:\n  darwin_arm64:\n  darwin_amd64:\n",
        ),
    ];
    for (app, version, content) in manifests {
        let dir = base.join(app).join(version);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("app.yml"), content).unwrap();
    }

    let markdown = ChartGenerator::default().generate(base).unwrap();

    assert_eq!(markdown, ChartRenderer::new(Config::default()).render(&sample_apps()));
}

#[test]
fn test_generate_empty_dir() {
    let temp_dir = tempdir().unwrap();

    let markdown = ChartGenerator::default().generate(temp_dir.path()).unwrap();

    assert_eq!(markdown, "");
}

#[test]
fn test_generate_fails_without_partial_output() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path();

    let good = base.join("good").join("v1");
    fs::create_dir_all(&good).unwrap();
    fs::write(good.join("app.yml"), "description: fine\n").unwrap();
    let bad = base.join("zzz").join("v1");
    fs::create_dir_all(&bad).unwrap();
    fs::write(bad.join("app.yml"), "platforms: {unclosed\n").unwrap();

    assert!(ChartGenerator::default().generate(base).is_err());
}
