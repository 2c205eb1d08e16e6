//! Panel field registrations for each preset.

use wavefield_panel::{PanelError, ParameterPanel, SliderSpec};
use wavefield_scene::{PresetKind, SurfaceUniforms};

pub type SurfacePanel = ParameterPanel<SurfaceUniforms>;

/// Build the parameter panel bound to the surface uniforms for `kind`.
pub fn surface_panel(kind: PresetKind) -> Result<SurfacePanel, PanelError> {
    let mut panel = ParameterPanel::new(format!("Wavefield ({kind})")).with_width(300.0);
    match kind {
        PresetKind::Orbit => register_orbit(&mut panel)?,
        PresetKind::Water => register_water(&mut panel)?,
    }
    Ok(panel)
}

fn register_orbit(panel: &mut SurfacePanel) -> Result<(), PanelError> {
    panel.add_slider(
        "big_waves_elevation",
        "Wave length",
        SliderSpec::new(0.0, 1.0, 0.01),
        |u| u.big_waves_elevation,
        |u, v| u.big_waves_elevation = v,
    )?;
    panel.add_slider(
        "big_waves_frequency_x",
        "Frequency X",
        SliderSpec::new(0.0, 10.0, 0.001),
        |u| u.big_waves_frequency.x,
        |u, v| u.big_waves_frequency.x = v,
    )?;
    panel.add_slider(
        "big_waves_frequency_y",
        "Frequency Y",
        SliderSpec::new(0.0, 10.0, 0.001),
        |u| u.big_waves_frequency.y,
        |u, v| u.big_waves_frequency.y = v,
    )?;
    panel.add_slider(
        "big_waves_speed",
        "Wave speed",
        SliderSpec::new(0.0, 4.0, 0.001),
        |u| u.big_waves_speed,
        |u, v| u.big_waves_speed = v,
    )?;
    Ok(())
}

fn register_water(panel: &mut SurfacePanel) -> Result<(), PanelError> {
    panel.add_slider(
        "big_waves_elevation",
        "Big waves elevation",
        SliderSpec::new(0.0, 1.0, 0.001),
        |u| u.big_waves_elevation,
        |u, v| u.big_waves_elevation = v,
    )?;
    panel.add_slider(
        "big_waves_frequency_x",
        "Big waves frequency X",
        SliderSpec::new(0.0, 10.0, 0.001),
        |u| u.big_waves_frequency.x,
        |u, v| u.big_waves_frequency.x = v,
    )?;
    panel.add_slider(
        "big_waves_frequency_y",
        "Big waves frequency Y",
        SliderSpec::new(0.0, 10.0, 0.001),
        |u| u.big_waves_frequency.y,
        |u, v| u.big_waves_frequency.y = v,
    )?;
    panel.add_slider(
        "big_waves_speed",
        "Big waves speed",
        SliderSpec::new(0.0, 4.0, 0.001),
        |u| u.big_waves_speed,
        |u, v| u.big_waves_speed = v,
    )?;
    panel.add_slider(
        "small_waves_elevation",
        "Small waves elevation",
        SliderSpec::new(0.0, 1.0, 0.001),
        |u| u.small_waves_elevation,
        |u, v| u.small_waves_elevation = v,
    )?;
    panel.add_slider(
        "small_waves_frequency",
        "Small waves frequency",
        SliderSpec::new(0.0, 30.0, 0.001),
        |u| u.small_waves_frequency,
        |u, v| u.small_waves_frequency = v,
    )?;
    panel.add_slider(
        "small_waves_speed",
        "Small waves speed",
        SliderSpec::new(0.0, 4.0, 0.001),
        |u| u.small_waves_speed,
        |u, v| u.small_waves_speed = v,
    )?;
    panel.add_slider(
        "small_waves_iterations",
        "Small waves iterations",
        SliderSpec::new(0.0, 5.0, 1.0),
        |u| u.small_waves_iterations,
        |u, v| u.small_waves_iterations = v,
    )?;
    panel.add_color(
        "depth_color",
        "Depth color",
        |u| u.depth_color,
        |u, c| u.depth_color = c,
    )?;
    panel.add_color(
        "surface_color",
        "Surface color",
        |u| u.surface_color,
        |u, c| u.surface_color = c,
    )?;
    panel.add_slider(
        "color_offset",
        "Color offset",
        SliderSpec::new(0.0, 1.0, 0.001),
        |u| u.color_offset,
        |u, v| u.color_offset = v,
    )?;
    panel.add_slider(
        "color_multiplier",
        "Color multiplier",
        SliderSpec::new(0.0, 10.0, 0.001),
        |u| u.color_multiplier,
        |u, v| u.color_multiplier = v,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefield_panel::{Control, FieldValue};
    use wavefield_scene::Preset;

    #[test]
    fn orbit_panel_binds_four_sliders() {
        let panel = surface_panel(PresetKind::Orbit).unwrap();
        let ids: Vec<_> = panel.fields().iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            [
                "big_waves_elevation",
                "big_waves_frequency_x",
                "big_waves_frequency_y",
                "big_waves_speed"
            ]
        );
    }

    #[test]
    fn water_panel_includes_colors() {
        let panel = surface_panel(PresetKind::Water).unwrap();
        let uniforms = Preset::water().uniforms;
        assert_eq!(
            panel.read("surface_color", &uniforms).unwrap(),
            FieldValue::Color(uniforms.surface_color)
        );
        assert_eq!(panel.fields().len(), 12);
    }

    #[test]
    fn bindings_write_the_right_uniform() {
        let panel = surface_panel(PresetKind::Water).unwrap();
        let mut u = Preset::water().uniforms;
        panel.edit_scalar("big_waves_frequency_y", 3.0, &mut u).unwrap();
        assert!((u.big_waves_frequency.y - 3.0).abs() < 1e-5);
        assert_eq!(u.big_waves_frequency.x, 4.0);

        panel.edit_scalar("small_waves_iterations", 2.7, &mut u).unwrap();
        assert_eq!(u.small_waves_iterations, 3.0);

        panel.edit_color("depth_color", "#000000", &mut u).unwrap();
        assert_eq!(u.depth_color.to_hex(), "#000000");
    }

    #[test]
    fn preset_values_sit_on_their_slider_grids() {
        for kind in PresetKind::ALL {
            let panel = surface_panel(kind).unwrap();
            let uniforms = Preset::from_kind(kind).uniforms;
            for field in panel.fields() {
                if let Control::Slider { spec, get, .. } = &field.control {
                    let value = get(&uniforms);
                    assert_eq!(spec.clamp(value), value, "{kind} {}", field.id);
                }
            }
        }
    }
}
