use crate::adapters::pixel_format::copy_pixel_buffer_to_rgba;
use crate::controllers::interactive::InteractiveControllerPresenterPort;
use crate::core::data::resolution::Resolution;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use tracing::warn;
use winit::window::Window;

/// Draws the newest fractal frame into a fixed-size `pixels` buffer and
/// paints the egui controls on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    resolution: Resolution,
    surface_width: u32,
    surface_height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, resolution: Resolution) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let mut pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)
            .expect("Failed to create pixels surface");

        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new()),
            resolution,
            surface_width: size.width,
            surface_height: size.height,
        }
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.draw_latest_frame();

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn window_pos_to_canvas(&self, position: (f32, f32)) -> (f64, f64) {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        (x as f64, y as f64)
    }

    fn progress(&self) -> u8 {
        self.adapter.progress()
    }
}

impl PixelsPresenter {
    fn draw_latest_frame(&mut self) {
        let Some(frame) = self.adapter.take_frame() else {
            return;
        };

        if frame.pixel_buffer.resolution() != self.resolution {
            warn!(generation = frame.generation, "dropping frame with mismatched resolution");
            return;
        }

        if let Err(err) = copy_pixel_buffer_to_rgba(&frame.pixel_buffer, self.pixels.frame_mut()) {
            warn!(%err, "failed to copy frame into surface");
        }
    }
}
