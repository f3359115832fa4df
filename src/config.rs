use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::color::ColorScheme;
use crate::export::DEFAULT_OUTPUT;
use crate::mesh::MeshParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mesh: MeshParams,
    pub export: ExportConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output file for the embedded-JSON mesh.
    pub path: PathBuf,
    /// Read the file back after writing and compare it with the generated mesh.
    pub verify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            verify: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub enabled: bool,
    pub color_scheme: ColorScheme,
    pub show_vertices: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color_scheme: ColorScheme::Spectrum,
            show_vertices: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/radial-mesh/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("radial-mesh").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                None
            }
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Write the commented template to `path`, creating parent directories.
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::generate_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# radial-mesh configuration
# Every key is optional; command-line flags override these values.

[mesh]
# Number of radial sample rings (>= 2)
radial_count = 10
# Number of angular sample rays (>= 2)
angular_count = 4
# Total angular span in degrees, centred on the +x axis
field_of_view_degrees = 45.0
# Radial extent; rings are log-spaced between these distances
min_distance = 0.01
max_distance = 200.0

[export]
# Output file; contains `radial_mesh = { "verts": [...], "tris": [...] };`
path = "radial_mesh.js"
# Re-read the written file and check it matches the generated mesh
verify = false

[preview]
# Show the terminal wireframe after exporting (skipped when not on a terminal)
enabled = true
# Color scheme: "spectrum", "rainbow", "fire", "ocean", "forest", "purple", "monochrome"
color_scheme = "spectrum"
# Draw a marker on every vertex
show_vertices = true
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        // Mesh parameters
        if let Some(n) = args.radial_count {
            self.mesh.radial_count = n;
        }
        if let Some(n) = args.angular_count {
            self.mesh.angular_count = n;
        }
        if let Some(fov) = args.fov {
            self.mesh.field_of_view_degrees = fov;
        }
        if let Some(d) = args.min_distance {
            self.mesh.min_distance = d;
        }
        if let Some(d) = args.max_distance {
            self.mesh.max_distance = d;
        }

        // Export settings
        if let Some(ref path) = args.output {
            self.export.path = path.clone();
        }
        if args.verify {
            self.export.verify = true;
        }

        // Preview settings
        if args.no_preview {
            self.preview.enabled = false;
        }
        if let Some(scheme) = args.colors {
            self.preview.color_scheme = scheme;
        }
        if args.hide_vertices {
            self.preview.show_vertices = false;
        }
    }
}
