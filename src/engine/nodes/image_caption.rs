use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::engine::capability::ImageCaptioner;
use crate::engine::error::NodeError;
use crate::engine::node::Node;
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};
use crate::ui::result_view::draw_result_view;

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Raw bytes of a file the user picked, not yet decoded.
pub struct UploadedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Preview state for the current upload. A failed decode is remembered until
/// the next upload.
enum Preview {
    Pending,
    Ready(egui::TextureHandle),
    Undecodable,
}

pub struct ImageCaptionNode {
    captioner: Arc<dyn ImageCaptioner>,
    pub image: Option<UploadedImage>,
    upload_error: Option<String>,
    preview: Preview,
}

impl ImageCaptionNode {
    pub fn new(captioner: Arc<dyn ImageCaptioner>) -> Self {
        Self {
            captioner,
            image: None,
            upload_error: None,
            preview: Preview::Pending,
        }
    }

    pub fn load_file(&mut self, path: &Path) {
        match fs::read(path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.image = Some(UploadedImage { name, bytes });
                self.upload_error = None;
                self.preview = Preview::Pending;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read uploaded image");
                self.upload_error = Some(format!("Could not read {}: {e}", path.display()));
            }
        }
    }

    fn preview_texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if matches!(self.preview, Preview::Pending) {
            let uploaded = self.image.as_ref()?;
            self.preview = match image::load_from_memory(&uploaded.bytes) {
                Ok(decoded) => {
                    let decoded = decoded.to_rgba8();
                    let size = [decoded.width() as usize, decoded.height() as usize];
                    let color = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());
                    Preview::Ready(ctx.load_texture("image_caption_preview", color, egui::TextureOptions::default()))
                }
                Err(e) => {
                    warn!(name = %uploaded.name, error = %e, "uploaded image does not decode; no preview");
                    Preview::Undecodable
                }
            };
        }
        match &self.preview {
            Preview::Ready(texture) => Some(texture),
            Preview::Pending | Preview::Undecodable => None,
        }
    }
}

impl Node for ImageCaptionNode {
    fn title(&self) -> &str {
        "Image Captioning Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::ImageCaption
    }

    fn trigger_label(&self) -> &str {
        "Generate Caption"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Upload an image").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Image", &IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    self.load_file(&path);
                }
            }

            match &self.image {
                Some(img) => ui.label(format!("{} ({} bytes)", img.name, img.bytes.len())),
                None => ui.weak("No file selected"),
            };
        });

        if let Some(err) = &self.upload_error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, err);
        }
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(uploaded) = self.image.as_ref().filter(|img| !img.bytes.is_empty()) else {
            return Ok(ProcessOutcome::Skipped);
        };

        let rgb = image::load_from_memory(&uploaded.bytes)
            .map_err(|e| NodeError::CapabilityRejected {
                capability: "image captioner",
                reason: format!("unsupported or corrupt image: {e}"),
            })?
            .to_rgb8();

        let caption = self
            .captioner
            .caption(&rgb)
            .map_err(|e| NodeError::from_capability("image captioner", e))?;

        ctx.publish(NodeOutput::ImageCaption(caption))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::ImageCaption) {
            Some(NodeOutput::ImageCaption(c)) => ResultView::Caption(c.clone()),
            _ => ResultView::Placeholder("No caption generated."),
        }
    }

    fn display_result(&mut self, ui: &mut egui::Ui, ctx: &SharedContext) {
        let view = self.result_view(ctx);
        if !view.is_placeholder() {
            if let Some(texture) = self.preview_texture(ui.ctx()) {
                ui.add(egui::Image::new(texture).max_width(320.0));
            }
        }
        draw_result_view(ui, &view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::capability::fakes::FakeCaptioner;
    use crate::engine::node::harness::{assert_node_contract, with_ui};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(w, h, image::Rgb([10, 20, 30]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn follows_node_contract() {
        assert_node_contract(&mut ImageCaptionNode::new(Arc::new(FakeCaptioner)));
    }

    #[test]
    fn captions_decoded_image() {
        let mut node = ImageCaptionNode::new(Arc::new(FakeCaptioner));
        node.image = Some(UploadedImage {
            name: "dot.png".into(),
            bytes: png_bytes(4, 3),
        });

        let mut ctx = SharedContext::new();
        node.process(&mut ctx.scope(NodeKind::ImageCaption)).unwrap();

        assert_eq!(node.result_view(&ctx), ResultView::Caption("a 4x3 picture".into()));
        with_ui(|ui| node.display_result(ui, &ctx));
    }

    #[test]
    fn corrupt_image_is_rejected_without_write() {
        let mut node = ImageCaptionNode::new(Arc::new(FakeCaptioner));
        node.image = Some(UploadedImage {
            name: "broken.jpg".into(),
            bytes: b"definitely not a jpeg".to_vec(),
        });

        let mut ctx = SharedContext::new();
        let err = node.process(&mut ctx.scope(NodeKind::ImageCaption)).unwrap_err();

        assert!(matches!(err, NodeError::CapabilityRejected { .. }));
        assert!(ctx.is_empty());
    }

    #[test]
    fn undecodable_upload_is_decoded_once_until_next_upload() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("pic.png");
        let bad = dir.path().join("broken.png");
        std::fs::write(&good, png_bytes(2, 2)).unwrap();
        std::fs::write(&bad, b"not an image").unwrap();

        let mut node = ImageCaptionNode::new(Arc::new(FakeCaptioner));
        let ctx = egui::Context::default();

        node.load_file(&bad);
        assert!(node.preview_texture(&ctx).is_none());
        assert!(matches!(node.preview, Preview::Undecodable));
        assert!(node.preview_texture(&ctx).is_none());
        assert!(matches!(node.preview, Preview::Undecodable));

        node.load_file(&good);
        assert!(matches!(node.preview, Preview::Pending));
    }

    #[test]
    fn load_file_reads_bytes_and_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        std::fs::write(&path, png_bytes(1, 1)).unwrap();

        let mut node = ImageCaptionNode::new(Arc::new(FakeCaptioner));
        node.load_file(&path);
        assert_eq!(node.image.as_ref().map(|i| i.name.as_str()), Some("pic.png"));

        node.load_file(&dir.path().join("missing.png"));
        assert!(node.upload_error.is_some());
        assert!(node.image.is_some());
    }
}
