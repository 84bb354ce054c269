use nanorand::{Rng, WyRand};
use rgbfilter::{apply, apply_in_place, FilterEngine, FilterError, FilterKind, Pixel, Raster};

fn random_raster(rng: &mut WyRand, height: usize, width: usize) -> Raster {
    let data: Vec<u8> = (0..height * width * 3).map(|_| rng.generate::<u8>()).collect();
    Raster::from_shape_vec(height, width, data).unwrap()
}

/// A spread of shapes including single rows, single columns and odd widths.
fn sample_rasters() -> Vec<Raster> {
    let mut rng = WyRand::new_seed(0x5eed);
    [(1, 1), (1, 3), (3, 1), (2, 2), (3, 3), (4, 7), (9, 5), (16, 16)]
        .iter()
        .map(|&(h, w)| random_raster(&mut rng, h, w))
        .collect()
}

#[test]
fn every_filter_preserves_dimensions() {
    for raster in sample_rasters() {
        for kind in FilterKind::ALL {
            let output = apply(kind, &raster);
            assert_eq!(output.height(), raster.height(), "{kind}");
            assert_eq!(output.width(), raster.width(), "{kind}");
        }
    }
}

#[test]
fn negative_is_self_inverse() {
    for raster in sample_rasters() {
        let back = apply(FilterKind::Negative, &apply(FilterKind::Negative, &raster));
        assert_eq!(back, raster);
    }
}

#[test]
fn reflect_is_self_inverse() {
    for mut raster in sample_rasters() {
        let original = raster.clone();
        apply_in_place(FilterKind::Reflect, &mut raster);
        apply_in_place(FilterKind::Reflect, &mut raster);
        assert_eq!(raster, original);
    }
}

#[test]
fn grayscale_is_idempotent() {
    for raster in sample_rasters() {
        let once = apply(FilterKind::Grayscale, &raster);
        let twice = apply(FilterKind::Grayscale, &once);
        assert_eq!(once, twice);

        for row in once.rows() {
            for px in row {
                assert!(px.r == px.g && px.g == px.b);
            }
        }
    }
}

#[test]
fn reflect_single_row() {
    let raster = Raster::from_rows(vec![vec![
        Pixel::new(0, 0, 0),
        Pixel::new(100, 100, 100),
        Pixel::new(200, 200, 200),
    ]])
    .unwrap();

    let output = apply(FilterKind::Reflect, &raster);

    assert_eq!(
        output.rows().next().unwrap(),
        vec![
            Pixel::new(200, 200, 200),
            Pixel::new(100, 100, 100),
            Pixel::new(0, 0, 0),
        ]
    );
}

#[test]
fn sepia_on_white_matches_formula() {
    let raster = Raster::new(3, 3, Pixel::WHITE).unwrap();

    let expected = |weights: [f64; 3]| -> u8 {
        let v = (weights[0] * 255.0 + weights[1] * 255.0 + weights[2] * 255.0).round();
        v.min(255.0) as u8
    };
    let want = Pixel::new(
        expected([0.393, 0.769, 0.189]),
        expected([0.349, 0.686, 0.168]),
        expected([0.272, 0.534, 0.131]),
    );
    assert_eq!(want, Pixel::new(255, 255, 239));

    let output = apply(FilterKind::Sepia, &raster);
    for row in output.rows() {
        for px in row {
            assert_eq!(px, want);
        }
    }
}

#[test]
fn blur_of_single_pixel_is_identity() {
    let raster = Raster::new(1, 1, Pixel::new(3, 141, 59)).unwrap();
    assert_eq!(apply(FilterKind::Blur, &raster), raster);
}

#[test]
fn blur_of_2x2_is_the_mean_everywhere() {
    let raster = Raster::from_rows(vec![
        vec![Pixel::new(0, 10, 255), Pixel::new(4, 20, 255)],
        vec![Pixel::new(8, 30, 0), Pixel::new(12, 40, 1)],
    ])
    .unwrap();

    let output = apply(FilterKind::Blur, &raster);

    // r: 24 / 4 = 6, g: 100 / 4 = 25, b: 511 / 4 = 127.75 -> 128
    for row in output.rows() {
        for px in row {
            assert_eq!(px, Pixel::new(6, 25, 128));
        }
    }
}

#[test]
fn edges_on_uniform_image() {
    let raster = Raster::new(4, 5, Pixel::new(20, 0, 255)).unwrap();

    let output = apply(FilterKind::Edges, &raster);

    // Interior has zero gradient
    for y in 1..3 {
        for x in 1..4 {
            assert_eq!(output.pixel(y, x), Pixel::BLACK);
        }
    }

    // Border pixels see zero padding on one side: 4 * value along the
    // non-corner edges, sqrt(2) * 3 * value in the corners
    assert_eq!(output.pixel(0, 2), Pixel::new(80, 0, 255));
    assert_eq!(output.pixel(3, 2), Pixel::new(80, 0, 255));
    assert_eq!(output.pixel(1, 0), Pixel::new(80, 0, 255));
    assert_eq!(output.pixel(2, 4), Pixel::new(80, 0, 255));
    // sqrt(60^2 + 60^2) = 84.85
    assert_eq!(output.pixel(0, 0), Pixel::new(85, 0, 255));
    assert_eq!(output.pixel(3, 4), Pixel::new(85, 0, 255));
}

#[test]
fn flat_image_survives_sharpen_and_emboss() {
    let raster = Raster::new(5, 6, Pixel::new(12, 130, 250)).unwrap();

    assert_eq!(apply(FilterKind::Sharpen, &raster), raster);
    assert_eq!(apply(FilterKind::Emboss, &raster), raster);
}

#[test]
fn neighborhood_filters_do_not_see_partial_output() {
    // Walking the raster and writing in place would smear the first pixel's
    // result into its neighbors. Compare against a per-pixel recomputation.
    let mut rng = WyRand::new_seed(42);
    let raster = random_raster(&mut rng, 6, 6);
    let output = apply(FilterKind::Blur, &raster);

    for y in 0..6usize {
        for x in 0..6usize {
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for sy in y.saturating_sub(1)..=(y + 1).min(5) {
                for sx in x.saturating_sub(1)..=(x + 1).min(5) {
                    let px = raster.pixel(sy, sx);
                    sum[0] += px.r as u32;
                    sum[1] += px.g as u32;
                    sum[2] += px.b as u32;
                    count += 1;
                }
            }
            let avg = |s: u32| (s as f64 / count as f64).round() as u8;
            assert_eq!(output.pixel(y, x), Pixel::new(avg(sum[0]), avg(sum[1]), avg(sum[2])));
        }
    }
}

#[test]
fn parallel_and_sequential_agree() {
    let mut rng = WyRand::new_seed(7);
    let raster = random_raster(&mut rng, 97, 61);

    let seq = FilterEngine::new(rgbfilter::EngineOptions::sequential());
    let par = FilterEngine::new(rgbfilter::EngineOptions {
        parallel: true,
        min_parallel_pixels: 1,
    });

    for kind in FilterKind::ALL {
        assert_eq!(seq.apply(kind, &raster), par.apply(kind, &raster), "{kind}");
    }
}

#[test]
fn filters_are_selected_by_name() {
    let raster = Raster::new(2, 2, Pixel::new(10, 20, 30)).unwrap();

    let kind: FilterKind = "negative".parse().unwrap();
    assert_eq!(apply(kind, &raster).pixel(1, 1), Pixel::new(245, 235, 225));

    assert!(matches!(
        "Vignette".parse::<FilterKind>(),
        Err(FilterError::UnknownFilter(_))
    ));
}
