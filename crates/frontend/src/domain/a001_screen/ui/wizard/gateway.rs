//! HTTP implementation of [`ScreenGateway`].

use async_trait::async_trait;
use contracts::domain::a001_screen::aggregate::{
    CreateCabinetDto, CreateModuleDto, CreateScreenForm,
};
use std::collections::HashMap;
use web_sys::FormData;

use super::model::FileSlot;
use super::submit::ScreenGateway;
use crate::domain::a001_screen::api;
use crate::shared::api_utils::ApiError;

/// Gateway built for one submission, owning the picked file handles
pub struct HttpScreenGateway {
    files: HashMap<FileSlot, web_sys::File>,
}

impl HttpScreenGateway {
    pub fn new(files: HashMap<FileSlot, web_sys::File>) -> Self {
        Self { files }
    }

    fn form_data(&self, form: &CreateScreenForm) -> Result<FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{:?}", e));
        let data = FormData::new().map_err(js_err)?;
        for (name, value) in form.to_fields() {
            data.append_with_str(name, &value).map_err(js_err)?;
        }
        for slot in FileSlot::ALL {
            let file = self.files.get(&slot).ok_or_else(|| {
                ApiError::Encode(format!("{} was not attached", slot.label()))
            })?;
            data.append_with_blob_and_filename(slot.part_name(), file, &file.name())
                .map_err(js_err)?;
        }
        Ok(data)
    }
}

#[async_trait(?Send)]
impl ScreenGateway for HttpScreenGateway {
    async fn create_screen(&self, form: &CreateScreenForm) -> Result<(), ApiError> {
        api::create_screen(self.form_data(form)?).await
    }

    async fn create_cabinet(&self, cabinet: &CreateCabinetDto) -> Result<(), ApiError> {
        api::create_cabinet(cabinet).await
    }

    async fn create_module(&self, module: &CreateModuleDto) -> Result<(), ApiError> {
        api::create_module(module).await
    }
}
