use random_walk::{
    color::{Colormap, Rgb},
    geometry::{Bounds, Position, Size, ORIGIN},
    path::Path,
    plot::{marker_radius, PlotStyle, Scatter, Viewport, DOT_SIZE},
    walk::Walk,
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn create_test_path(steps: usize) -> Path {
    let mut walk = Walk::new(steps, TEST_SEED);
    walk.run();
    walk.into_path()
}

fn create_short_path() -> Path {
    [(1, 0), (2, 1), (3, 1)]
        .into_iter()
        .map(Position::from)
        .collect()
}

#[test]
fn test_colormap_endpoints_and_clamping() {
    let map = Colormap::YlGnBu;

    assert_eq!(map.sample(0.0), Rgb::from_hex(0xffffd9));
    assert_eq!(map.sample(1.0), Rgb::from_hex(0x081d58));
    assert_eq!(map.sample(-3.0), map.sample(0.0));
    assert_eq!(map.sample(7.0), map.sample(1.0));
    assert_eq!(map.sample(0.5), Rgb::from_hex(0x41b6c4));
}

#[test]
fn test_colormap_for_index() {
    for map in Colormap::ALL {
        assert_eq!(map.for_index(0, 1), map.sample(0.0));
        assert_eq!(map.for_index(0, 10), map.sample(0.0));
        assert_eq!(map.for_index(9, 10), map.sample(1.0));
    }
}

#[test]
fn test_colormap_from_str() {
    assert_eq!("YlGnBu".parse::<Colormap>(), Ok(Colormap::YlGnBu));
    assert_eq!("blues".parse::<Colormap>(), Ok(Colormap::Blues));
    assert_eq!("GREYS".parse::<Colormap>(), Ok(Colormap::Greys));
    assert!("viridis".parse::<Colormap>().is_err());
    assert_eq!(Colormap::default(), Colormap::YlGnBu);
}

#[test]
fn test_rgb_lerp() {
    assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.0), Rgb::BLACK);
    assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 1.0), Rgb::WHITE);
    assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
}

#[test]
fn test_scatter_has_one_point_per_entry() {
    let path = create_test_path(1000);
    let style = PlotStyle::default();
    let scatter = Scatter::from_path(&path, &style);

    assert_eq!(scatter.points().len(), path.len());
    assert_eq!(scatter.markers().count(), path.len() + 2);

    for ((_, position), marker) in path.iter().zip(scatter.points()) {
        assert_eq!(marker.position(), position);
        assert_eq!(marker.size, DOT_SIZE);
    }

    let points = scatter.points();
    assert_eq!(points[0].color, style.colormap.sample(0.0));
    assert_eq!(points[points.len() - 1].color, style.colormap.sample(1.0));
}

#[test]
fn test_scatter_start_and_end_markers() {
    let path = create_test_path(1000);
    let style = PlotStyle::default();
    let scatter = Scatter::from_path(&path, &style);

    let start = scatter.start();
    assert_eq!(start.position(), ORIGIN);
    assert_eq!(start.color, Rgb::GREEN);
    assert_eq!(start.size, DOT_SIZE * 6.0);

    let end = scatter.end().unwrap();
    assert_eq!(Some(end.position()), path.last());
    assert_eq!(end.color, Rgb::RED);
    assert_eq!(end.size, DOT_SIZE * 6.0);

    // start and end are drawn on top, in that order
    let markers: Vec<_> = scatter.markers().collect();
    assert_eq!(markers[markers.len() - 2], start);
    assert_eq!(markers[markers.len() - 1], end);
}

#[test]
fn test_scatter_of_empty_path() {
    let scatter = Scatter::from_path(&Path::new(), &PlotStyle::default());

    assert!(scatter.points().is_empty());
    assert!(scatter.end().is_none());
    assert_eq!(scatter.markers().count(), 1);
    assert_eq!(scatter.bounds(), Bounds::around(ORIGIN));
}

#[test]
fn test_scatter_uses_chosen_colormap() {
    let path = create_short_path();
    let style = PlotStyle::default().with_colormap(Colormap::Greys);
    let scatter = Scatter::from_path(&path, &style);

    assert_eq!(scatter.points()[0].color, Rgb::WHITE);
    assert_eq!(scatter.points()[2].color, Rgb::BLACK);
}

#[test]
fn test_viewport_keeps_markers_inside_frame() {
    let path = create_test_path(5000);
    let scatter = Scatter::from_path(&path, &PlotStyle::default());
    let size = Size::new(800, 600);
    let margin = 20;
    let viewport = Viewport::fit(scatter.bounds(), size, margin);

    for marker in scatter.markers() {
        let (px, py) = viewport.project(marker.x, marker.y);

        assert!(px >= margin as i32 && px <= (size.width - 1 - margin) as i32);
        assert!(py >= margin as i32 && py <= (size.height - 1 - margin) as i32);
    }
}

#[test]
fn test_viewport_orientation_and_aspect() {
    let bounds = Bounds {
        min_x: -10,
        max_x: 10,
        min_y: -10,
        max_y: 10,
    };
    let viewport = Viewport::fit(bounds, Size::new(401, 201), 0);

    assert_eq!(viewport.project(0, 0), (200, 100));
    assert_eq!(viewport.scale(), 10.0);

    // y points up
    assert!(viewport.project(0, 5).1 < viewport.project(0, 0).1);
    assert!(viewport.project(5, 0).0 > viewport.project(0, 0).0);

    // equal scale on both axes
    let (x0, y0) = viewport.project(0, 0);
    let (x1, _) = viewport.project(1, 0);
    let (_, y1) = viewport.project(0, 1);
    assert_eq!(x1 - x0, y0 - y1);
}

#[test]
fn test_viewport_degenerate_bounds_center() {
    let viewport = Viewport::fit(Bounds::around(ORIGIN), Size::new(801, 601), 20);

    assert_eq!(viewport.project(0, 0), (400, 300));
}

#[test]
fn test_marker_radius() {
    assert_eq!(marker_radius(DOT_SIZE), 1);
    assert_eq!(marker_radius(DOT_SIZE * 6.0), 3);
    assert_eq!(marker_radius(0.0), 1);
}

#[cfg(feature = "image-output")]
#[test]
fn test_rasterize_draws_accents() {
    use random_walk::raster::rasterize;

    let path = create_short_path();
    let scatter = Scatter::from_path(&path, &PlotStyle::default());
    let size = Size::new(200, 100);
    let margin = 20;

    let image = rasterize(&scatter, size, margin);
    let viewport = Viewport::fit(scatter.bounds(), size, margin);

    assert_eq!(image.dimensions(), (200, 100));
    assert_eq!(image.get_pixel(0, 0).0, Rgb::WHITE.to_rgba());

    let (sx, sy) = viewport.project(0, 0);
    assert_eq!(image.get_pixel(sx as u32, sy as u32).0, Rgb::GREEN.to_rgba());

    let (ex, ey) = viewport.project(3, 1);
    assert_eq!(image.get_pixel(ex as u32, ey as u32).0, Rgb::RED.to_rgba());

    let (px, py) = viewport.project(1, 0);
    assert_eq!(
        image.get_pixel(px as u32, py as u32).0,
        Colormap::YlGnBu.sample(0.0).to_rgba()
    );
}

#[cfg(feature = "image-output")]
#[test]
fn test_image_renderer_saves_png() {
    use random_walk::render::image_renderer::ImageRenderer;
    use random_walk::render::{RenderEvent, Renderer};

    let output = std::env::temp_dir().join(format!("random-walk-test-{}.png", std::process::id()));
    let path = create_test_path(2000);
    let scatter = Scatter::from_path(&path, &PlotStyle::default());

    let mut renderer = ImageRenderer::new(output.clone());
    assert!(renderer.initialize(Size::uniform(0)).is_err());
    assert!(renderer.initialize(Size::new(usize::MAX, 2)).is_err());

    renderer.initialize(Size::new(320, 240)).unwrap();
    renderer.handle_event(&RenderEvent::Started).unwrap();
    assert!(!renderer.should_quit());
    renderer.finalize(&scatter).unwrap();

    assert_eq!(renderer.final_image().unwrap().dimensions(), (320, 240));

    let saved = image::open(&output).unwrap();
    assert_eq!((saved.width(), saved.height()), (320, 240));

    std::fs::remove_file(&output).unwrap();
}
