//! Render command implementation.
//!
//! Loads wrestler files, validates them, and writes one PNG avatar per
//! wrestler, optionally packed into a roster sheet.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, expand_paths, load_manifest, Manifest};
use crate::error::{RingsideError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{
    render, unique_name, write_png, write_sheet_json, Avatar, SheetPacker, MAX_SCALE,
};
use crate::types::Wrestler;
use crate::validation::{print_diagnostics, validate_wrestler};

/// Render wrestler avatars to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Wrestler files or directories (defaults to the manifest's sources)
    pub paths: Vec<PathBuf>,

    /// Output directory (defaults to the manifest's `output`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling, 1-64)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    pub scale: Option<u32>,

    /// Also pack every avatar into roster.png / roster.json
    #[arg(long)]
    pub sheet: bool,

    /// Gap in pixels between avatars on the roster sheet
    #[arg(long)]
    pub padding: Option<u32>,

    /// Render even when validation reports errors
    #[arg(long)]
    pub force: bool,

    /// Project directory holding ringside.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// Settings resolved from the command line over the manifest.
struct RenderSettings {
    output: PathBuf,
    scale: u32,
    sheet: bool,
    padding: u32,
}

impl RenderSettings {
    fn resolve(args: &RenderArgs, manifest: &Manifest) -> Self {
        Self {
            output: args
                .output
                .clone()
                .unwrap_or_else(|| args.project.join(&manifest.output)),
            scale: args
                .scale
                .unwrap_or(manifest.effective_scale())
                .clamp(1, MAX_SCALE),
            sheet: args.sheet || manifest.sheet,
            padding: args.padding.unwrap_or(manifest.padding),
        }
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let (manifest, files) = if args.paths.is_empty() {
        let project = discover(&args.project)?;
        (project.manifest, project.files)
    } else {
        let (manifest, _) = load_manifest(&args.project)?;
        let files = expand_paths(&args.paths, &manifest);
        (manifest, files)
    };

    if files.is_empty() {
        return Err(RingsideError::EmptyRoster {
            path: args.project.clone(),
        });
    }

    let settings = RenderSettings::resolve(&args, &manifest);
    ensure_dir(&settings.output)?;

    let mut avatars: Vec<Avatar> = Vec::with_capacity(files.len());
    let mut slugs = HashSet::new();

    for file in &files {
        let wrestler = Wrestler::load(file)?;

        let result = validate_wrestler(&wrestler);
        print_diagnostics(&result, printer);
        if !args.force {
            result.into_result()?;
        }

        // Two wrestlers with the same ring name would otherwise overwrite each other.
        let slug = unique_name(&mut slugs, &wrestler.slug());
        let avatar = render(&wrestler.appearance).with_name(&slug);

        let path = settings.output.join(format!("{}.png", slug));
        write_png(avatar.pixels(), &path, settings.scale)?;

        let size = avatar.width() as u32 * settings.scale;
        printer.status(
            "Rendered",
            &format!("{} ({}x{}) -> {}", slug, size, size, display_path(&path)),
        );

        avatars.push(avatar);
    }

    if settings.sheet {
        write_roster(&avatars, &settings, printer)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(avatars.len(), "avatar", "avatars"),
            display_path(&settings.output)
        ),
    );

    Ok(())
}

fn write_roster(avatars: &[Avatar], settings: &RenderSettings, printer: &Printer) -> Result<()> {
    let (pixels, mut meta) = SheetPacker::new(settings.padding).pack(avatars);
    meta.scale = settings.scale;

    let image_path = settings.output.join(&meta.image);
    write_png(&pixels, &image_path, settings.scale)?;
    write_sheet_json(&meta, &settings.output.join("roster.json"))?;

    printer.status(
        "Packed",
        &format!(
            "{} into {} ({}x{})",
            plural(meta.frames.len(), "avatar", "avatars"),
            display_path(&image_path),
            meta.size.0 * settings.scale,
            meta.size.1 * settings.scale
        ),
    );

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| RingsideError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CRUSHER: &str = r##"
name: The Crusher
strength: 80
appearance:
  build: heavy
  hair_style: bald
  costume_color: "#ff2d55"
"##;

    fn args(project: &Path) -> RenderArgs {
        RenderArgs {
            paths: vec![],
            output: None,
            scale: None,
            sheet: false,
            padding: None,
            force: false,
            project: project.to_path_buf(),
        }
    }

    fn quiet() -> Printer {
        Printer::new(true)
    }

    #[test]
    fn test_render_discovers_project() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crusher.wrestler.yaml"), CRUSHER).unwrap();

        run(args(dir.path()), &quiet()).unwrap();

        let png = dir.path().join("dist/the-crusher.png");
        let img = image::open(&png).unwrap();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn test_render_uses_manifest_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ringside.yaml"),
            "output: build\nscale: 2\nsheet: true\n",
        )
        .unwrap();
        fs::write(dir.path().join("crusher.wrestler.yaml"), CRUSHER).unwrap();
        fs::write(dir.path().join("rookie.wrestler.json"), r#"{"name": "Rookie"}"#).unwrap();

        run(args(dir.path()), &quiet()).unwrap();

        let out = dir.path().join("build");
        let img = image::open(out.join("the-crusher.png")).unwrap();
        assert_eq!(img.width(), 128);
        assert!(out.join("rookie.png").exists());

        let sheet = image::open(out.join("roster.png")).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (256, 128));

        let json = fs::read_to_string(out.join("roster.json")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(meta["meta"]["scale"], "2");
        assert_eq!(meta["frames"]["rookie"]["frame"]["x"], 128);
    }

    #[test]
    fn test_render_explicit_paths_and_flags() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("crusher.yaml");
        fs::write(&file, CRUSHER).unwrap();
        let out = dir.path().join("avatars");

        let mut a = args(dir.path());
        a.paths = vec![file];
        a.output = Some(out.clone());
        a.scale = Some(3);
        run(a, &quiet()).unwrap();

        let img = image::open(out.join("the-crusher.png")).unwrap();
        assert_eq!(img.width(), 192);
        assert!(!out.join("roster.png").exists());
    }

    #[test]
    fn test_render_refuses_invalid_wrestler() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("cheat.wrestler.yaml"),
            "name: Cheat\nstrength: 85\nagility: 85\ncharisma: 85\n",
        )
        .unwrap();

        let err = run(args(dir.path()), &quiet()).unwrap_err();
        assert!(matches!(err, RingsideError::Validation { .. }));
        assert!(!dir.path().join("dist/cheat.png").exists());

        let mut forced = args(dir.path());
        forced.force = true;
        run(forced, &quiet()).unwrap();
        assert!(dir.path().join("dist/cheat.png").exists());
    }

    #[test]
    fn test_render_no_files() {
        let dir = tempdir().unwrap();
        assert!(run(args(dir.path()), &quiet()).is_err());
    }

    #[test]
    fn test_render_keeps_every_colliding_wrestler() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.wrestler.yaml"), "name: Venom\n").unwrap();
        fs::write(dir.path().join("b.wrestler.yaml"), "name: Venom\n").unwrap();
        fs::write(dir.path().join("c.wrestler.yaml"), "name: Venom 2\n").unwrap();

        let mut a = args(dir.path());
        a.sheet = true;
        run(a, &quiet()).unwrap();

        let out = dir.path().join("dist");
        for name in ["venom", "venom-2", "venom-2-2"] {
            assert!(out.join(format!("{}.png", name)).exists(), "{}", name);
        }

        let json = fs::read_to_string(out.join("roster.json")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(meta["frames"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_scale_is_capped() {
        let dir = tempdir().unwrap();
        let manifest = Manifest {
            scale: Some(100_000),
            ..Manifest::default()
        };
        let mut a = args(dir.path());
        assert_eq!(RenderSettings::resolve(&a, &manifest).scale, MAX_SCALE);

        a.scale = Some(0);
        assert_eq!(RenderSettings::resolve(&a, &manifest).scale, 1);
    }

    #[test]
    fn test_unique_slug() {
        let mut seen = HashSet::new();
        assert_eq!(unique_name(&mut seen, "venom"), "venom");
        assert_eq!(unique_name(&mut seen, "venom"), "venom-2");
        assert_eq!(unique_name(&mut seen, "crusher"), "crusher");
        assert_eq!(unique_name(&mut seen, "venom-2"), "venom-2-2");
    }
}
