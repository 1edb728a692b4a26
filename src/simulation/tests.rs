// Engine and sweep tests

#[cfg(test)]
mod engine {
    use crate::electrode::{ElectrodeMaterial, Electrolyte, ELECTRODE_MATERIALS, ELECTROLYTES};
    use crate::errors::SimError;
    use crate::simulation::{simulate, simulate_config, endurance_estimate, CellConfiguration, Mode};

    const LEAD: &str = "Lead (Pb)";
    const ACID: &str = "Sulfuric Acid (H2SO4)";

    #[test]
    fn lead_acid_reference_point() {
        let r = simulate(LEAD, ACID, 1200.0, 0.5, 3, Mode::Endurance).unwrap();
        assert!((r.resistance - 0.8 * 0.0005 / 0.12).abs() < 1e-9);
        assert!((r.resistance - 0.003_333).abs() < 1e-3);
        assert!((r.voltage - 6.0).abs() < 1e-3);
        assert!((r.max_current - 1800.0).abs() < 1e-3);
        assert!((r.power - 10800.0).abs() < 1e-3);
        // 0.12 * 3600 / (6 * 1000)
        assert!((r.charge_time_min - 0.072).abs() < 1e-9);

        let e = r.endurance.expect("endurance fields");
        assert!((e.energy_wh - 54.0).abs() < 1e-9);
        assert!((e.energy_j - 194_400.0).abs() < 1e-6);
        assert!((e.discharge_duration_s - 18.0).abs() < 1e-6);
    }

    #[test]
    fn resistance_and_power_identities_hold_across_catalog() {
        for &electrode in ELECTRODE_MATERIALS {
            for &electrolyte in ELECTROLYTES {
                for &(area, gap, cells) in &[(400.0, 0.5, 3), (800.0, 1.0, 6), (1200.0, 2.0, 9)] {
                    let cfg = CellConfiguration::new(area, gap, cells, Mode::Power);
                    let r = simulate_config(electrode, electrolyte, &cfg).unwrap();

                    let expected_r = electrolyte.resistivity() * (gap / 1000.0) / (area / 10000.0);
                    assert!((r.resistance - expected_r).abs() <= 1e-12 * expected_r.max(1.0));

                    let via_current = r.voltage * (r.voltage / r.resistance);
                    let via_square = r.voltage * r.voltage / r.resistance;
                    assert!((r.power - via_current).abs() <= 1e-9 * r.power);
                    assert!((r.power - via_square).abs() <= 1e-9 * r.power);

                    assert_eq!(r.voltage, electrode.voltage_per_cell() * cells as f64);
                }
            }
        }
    }

    #[test]
    fn power_mode_has_no_endurance_fields() {
        let r = simulate(LEAD, ACID, 1200.0, 1.0, 6, Mode::Power).unwrap();
        assert!(r.endurance.is_none());
        assert_eq!(r.mode(), Mode::Power);

        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("endurance").is_none());
    }

    #[test]
    fn endurance_mode_adds_exactly_three_fields() {
        let r = simulate(LEAD, ACID, 1200.0, 1.0, 6, Mode::Endurance).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        let extra = json["endurance"].as_object().expect("endurance object");
        assert_eq!(extra.len(), 3);
        assert!(extra.contains_key("energy_wh"));
        assert!(extra.contains_key("energy_j"));
        assert!(extra.contains_key("discharge_duration_s"));
    }

    #[test]
    fn unrecognized_mode_behaves_as_endurance() {
        let mode = Mode::from("turbo");
        assert_eq!(mode, Mode::Endurance);
        let r = simulate(LEAD, ACID, 1200.0, 0.5, 3, mode).unwrap();
        assert!(r.endurance.is_some());
    }

    #[test]
    fn zero_power_gives_zero_duration() {
        let e = endurance_estimate(1200.0, 3, 0.0);
        assert_eq!(e.discharge_duration_s, 0.0);
        let e = endurance_estimate(1200.0, 3, -5.0);
        assert_eq!(e.discharge_duration_s, 0.0);
        assert!(e.energy_wh > 0.0);
    }

    #[test]
    fn unknown_keys_are_lookup_errors() {
        assert!(matches!(
            simulate("Mithril", ACID, 1200.0, 0.5, 3, Mode::Power),
            Err(SimError::UnknownElectrode(_))
        ));
        assert!(matches!(
            simulate(LEAD, "Lemon Juice", 1200.0, 0.5, 3, Mode::Power),
            Err(SimError::UnknownElectrolyte(_))
        ));
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let cases = [
            CellConfiguration::new(0.0, 0.5, 3, Mode::Power),
            CellConfiguration::new(1200.0, 0.0, 3, Mode::Power),
            CellConfiguration::new(1200.0, 0.5, 0, Mode::Power),
            CellConfiguration::new(-10.0, 0.5, 3, Mode::Power),
            CellConfiguration::new(f64::NAN, 0.5, 3, Mode::Power),
            // Positive inputs that vanish or overflow once converted to metres
            CellConfiguration::new(1200.0, 1e-321, 3, Mode::Endurance),
            CellConfiguration::new(1e-321, 0.5, 3, Mode::Endurance),
            CellConfiguration::new(f64::MAX, 0.5, 3, Mode::Power),
            CellConfiguration::new(1e300, 1e-300, 3, Mode::Power),
        ];
        for cfg in &cases {
            let res = simulate_config(ElectrodeMaterial::Lead, Electrolyte::SulfuricAcid, cfg);
            assert!(
                matches!(res, Err(SimError::InvalidGeometry { .. })),
                "{:?} should be rejected",
                cfg
            );
        }
    }
}

#[cfg(test)]
mod sweep {
    use crate::electrode::{ElectrodeMaterial, Electrolyte};
    use crate::errors::SimError;
    use crate::simulation::{run_sweep, run_sweep_by_name, CellConfiguration, Mode, SweepGrid};

    #[test]
    fn four_case_sweep_preserves_order() {
        let configs: Vec<_> = [(1200.0, 0.5, 3), (1200.0, 0.5, 6), (1200.0, 1.0, 3), (1200.0, 1.0, 6)]
            .iter()
            .map(|&(a, g, c)| CellConfiguration::new(a, g, c, Mode::Endurance))
            .collect();
        let results = run_sweep_by_name("Lead (Pb)", "Sulfuric Acid (H2SO4)", &configs).unwrap();

        assert_eq!(results.len(), 4);
        for (cfg, r) in configs.iter().zip(&results) {
            assert_eq!(r.plate_gap_mm, cfg.plate_gap_mm);
            assert_eq!(r.cells, cfg.num_cells);
            assert!((r.voltage - 2.0 * cfg.num_cells as f64).abs() < 1e-12);
            assert!(r.voltage == 6.0 || r.voltage == 12.0);
        }
    }

    #[test]
    fn duplicates_are_evaluated_every_time() {
        let cfg = CellConfiguration::new(800.0, 1.0, 3, Mode::Power);
        let results = run_sweep(
            ElectrodeMaterial::Zinc,
            Electrolyte::SaltWater,
            &[cfg, cfg, cfg],
        )
        .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], results[2]);
    }

    #[test]
    fn grid_expands_area_outer_gap_middle_cells_inner() {
        let grid = SweepGrid::new(vec![400.0, 800.0], vec![0.5, 1.0, 2.0], vec![3, 6]);
        let configs = grid.configurations(Mode::Power);
        assert_eq!(configs.len(), grid.len());
        assert_eq!(configs.len(), 12);

        assert_eq!((configs[0].plate_area_cm2, configs[0].plate_gap_mm, configs[0].num_cells), (400.0, 0.5, 3));
        assert_eq!((configs[1].plate_area_cm2, configs[1].plate_gap_mm, configs[1].num_cells), (400.0, 0.5, 6));
        assert_eq!((configs[2].plate_area_cm2, configs[2].plate_gap_mm, configs[2].num_cells), (400.0, 1.0, 3));
        assert_eq!((configs[6].plate_area_cm2, configs[6].plate_gap_mm, configs[6].num_cells), (800.0, 0.5, 3));
        assert!(configs.iter().all(|c| c.mode == Mode::Power));
    }

    #[test]
    fn single_area_grid_is_gap_outer_cells_inner() {
        let grid = SweepGrid::for_area(1200.0, &[0.5, 1.0, 2.0], &[3, 6, 9]);
        let configs = grid.configurations(Mode::Endurance);
        let pairs: Vec<_> = configs.iter().map(|c| (c.plate_gap_mm, c.num_cells)).collect();
        assert_eq!(
            pairs,
            vec![
                (0.5, 3), (0.5, 6), (0.5, 9),
                (1.0, 3), (1.0, 6), (1.0, 9),
                (2.0, 3), (2.0, 6), (2.0, 9),
            ]
        );
    }

    #[test]
    fn empty_grid_produces_empty_sweep() {
        let grid = SweepGrid::new(vec![1200.0], vec![], vec![3]);
        assert!(grid.is_empty());
        let results = run_sweep(
            ElectrodeMaterial::Lead,
            Electrolyte::SulfuricAcid,
            &grid.configurations(Mode::Power),
        )
        .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn invalid_configuration_aborts_sweep() {
        let configs = [
            CellConfiguration::new(1200.0, 0.5, 3, Mode::Power),
            CellConfiguration::new(1200.0, -1.0, 3, Mode::Power),
        ];
        let res = run_sweep(ElectrodeMaterial::Lead, Electrolyte::SulfuricAcid, &configs);
        assert!(matches!(res, Err(SimError::InvalidGeometry { field: "plate gap", .. })));
    }
}
