use crate::controllers::interactive::data::frame_data::{FrameData, ProgressReport};

#[derive(Debug)]
pub enum RenderEvent {
    Progress(ProgressReport),
    Frame(FrameData),
}
