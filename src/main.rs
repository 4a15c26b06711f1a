// External crates
use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

// Internal imports
use canvas_rusterizer::random::{random_colour, random_triangle};
use canvas_rusterizer::scenes;
use canvas_rusterizer::{
    Colour, ScreenSpace, Texture, TextureMap, draw_filled_triangle, draw_stroked_triangle,
    draw_textured_triangle, load_texture,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scene {
    Blank,
    RedNoise,
    Greyscale,
    Gradient,
    Barycentric,
    Lines,
    Textured,
}

#[derive(Debug, Parser)]
#[command(about = "Scanline software rasterizer playground")]
struct Args {
    #[arg(long, default_value_t = 320)]
    width: u32,
    #[arg(long, default_value_t = 240)]
    height: u32,
    /// Window pixels per canvas pixel
    #[arg(long, default_value_t = 3)]
    scale: u32,
    /// Seed for random triangles and colours
    #[arg(short = 's', long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Scene::Blank)]
    scene: Scene,
    /// Texture image (PPM, PNG, BMP, ...); a checkerboard is used when absent
    #[arg(short = 't', long)]
    texture: Option<String>,
    /// Skip the white outline drawn over filled and textured triangles
    #[arg(long, default_value_t)]
    no_outline: bool,
    /// Saved frames go to <output>.ppm and <output>.bmp
    #[arg(short = 'o', long, default_value = "output")]
    output: String,
}

struct Demo {
    screen: ScreenSpace,
    texture: Texture,
    outline: Option<Colour>,
    rng: StdRng,
}

impl Demo {
    fn draw_scene(&mut self, scene: Scene) {
        log::info!("Drawing scene {scene:?}");
        match scene {
            Scene::Blank => self.screen.clear(Colour::BLACK),
            Scene::RedNoise => scenes::draw_red_noise(&mut self.screen, &mut self.rng),
            Scene::Greyscale => scenes::draw_greyscale(&mut self.screen),
            Scene::Gradient => scenes::draw_colour_gradient(&mut self.screen),
            Scene::Barycentric => scenes::draw_barycentric(&mut self.screen),
            Scene::Lines => scenes::draw_line_pattern(&mut self.screen),
            Scene::Textured => self.draw_textured_demo(),
        }
    }

    fn draw_random_stroked(&mut self) {
        let colour = random_colour(&mut self.rng);
        let triangle = random_triangle(&mut self.rng, self.screen.width, self.screen.height);
        log::debug!("Stroked triangle {:?}", triangle.vertices);
        draw_stroked_triangle(&mut self.screen, &triangle, colour);
    }

    fn draw_random_filled(&mut self) {
        let colour = random_colour(&mut self.rng);
        let triangle = random_triangle(&mut self.rng, self.screen.width, self.screen.height);
        log::debug!("Filled triangle {:?}", triangle.vertices);
        draw_filled_triangle(&mut self.screen, &triangle, colour, self.outline);
    }

    fn draw_textured_demo(&mut self) {
        draw_textured_triangle(&mut self.screen, &scenes::textured_demo_triangle(), &self.texture, self.outline);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        return Err(anyhow!("Canvas must be at least 1x1, got {}x{}", args.width, args.height));
    }

    let texture = match &args.texture {
        Some(path) => {
            log::info!("Loading texture from '{path}'");
            let texture_map = TextureMap::load(path).with_context(|| format!("Error loading texture '{path}'"))?;
            load_texture(&texture_map)
        }
        None => Texture::checkerboard(512, 512, 32),
    };

    let mut demo = Demo {
        screen: ScreenSpace::new(args.width, args.height),
        texture,
        outline: (!args.no_outline).then_some(Colour::WHITE),
        rng: StdRng::seed_from_u64(args.seed),
    };
    demo.draw_scene(args.scene);

    let window_width = (args.width * args.scale.max(1)) as i32;
    let window_height = (args.height * args.scale.max(1)) as i32;
    let (mut r1, thread) = raylib::init()
        .size(window_width, window_height)
        .title("Rusterizer")
        .resizable()
        .build();
    r1.set_target_fps(60);

    let image = Image::gen_image_color(args.width as i32, args.height as i32, Color::BLACK);
    let mut frame = r1
        .load_texture_from_image(&thread, &image)
        .map_err(|e| anyhow!("raylib texture creation failed: {e:?}"))?;

    log::info!("U: stroked triangle, F: filled triangle, T: textured triangle, R: redraw scene, C: clear, click: save frame");

    while !r1.window_should_close() {
        if r1.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            break;
        }

        if r1.is_key_pressed(KeyboardKey::KEY_LEFT) { log::info!("LEFT") }
        if r1.is_key_pressed(KeyboardKey::KEY_RIGHT) { log::info!("RIGHT") }
        if r1.is_key_pressed(KeyboardKey::KEY_UP) { log::info!("UP") }
        if r1.is_key_pressed(KeyboardKey::KEY_DOWN) { log::info!("DOWN") }
        if r1.is_key_pressed(KeyboardKey::KEY_U) { demo.draw_random_stroked() }
        if r1.is_key_pressed(KeyboardKey::KEY_F) { demo.draw_random_filled() }
        if r1.is_key_pressed(KeyboardKey::KEY_T) { demo.draw_textured_demo() }
        if r1.is_key_pressed(KeyboardKey::KEY_R) { demo.draw_scene(args.scene) }
        if r1.is_key_pressed(KeyboardKey::KEY_C) { demo.screen.clear(Colour::BLACK) }

        if r1.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Err(err) = demo.screen.write_ppm(format!("{}.ppm", args.output)) {
                log::error!("{err:#}");
            }
            if let Err(err) = demo.screen.write_bmp(format!("{}.bmp", args.output)) {
                log::error!("{err:#}");
            }
        }

        // Put it in a window!
        let _ = frame.update_texture(demo.screen.rgba());
        let window_width = r1.get_screen_width();
        let window_height = r1.get_screen_height();

        let mut d = r1.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &frame,
            Rectangle { x: 0.0, y: 0.0, width: args.width as f32, height: args.height as f32 },
            Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
