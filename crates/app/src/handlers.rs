//! Request handlers for the status page and the LED endpoints.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | [`StatusPage`] — index asset rendered with `LED_STATE` |
//! | `POST` | `/api/on` | [`SetRegister`] — LED on, `{"status":"on"}` |
//! | `POST` | `/api/off` | [`SetRegister`] — LED off, `{"status":"off"}` |

use std::sync::Arc;

use serde::Serialize;

use blinkhub_domain::asset::AssetName;
use blinkhub_domain::error::RouteError;
use blinkhub_domain::register::{RegisterName, on_off};
use blinkhub_domain::route::{Method, Request, Response};
use blinkhub_domain::template::{self, Substitutions};

use crate::ports::{AssetSource, OutputControl};
use crate::services::asset_store::AssetStore;
use crate::services::device_state::DeviceState;
use crate::services::dispatcher::{Handler, HandlerFuture, RouteDispatcher};

/// Placeholder replaced with `ON` / `OFF` on the status page.
pub const LED_STATE_TOKEN: &str = "LED_STATE";

/// Settings for [`install`].
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Asset rendered by `GET /`.
    pub index: AssetName,
    /// Register toggled by `/api/on` and `/api/off`.
    pub led: RegisterName,
}

/// Register the status page and LED routes on `dispatcher`.
///
/// # Errors
///
/// Returns [`RouteError::Configuration`] if `config.led` is not a register of
/// `state`, or [`RouteError::Duplicate`] if one of the routes is already bound.
pub fn install<S, O>(
    dispatcher: &mut RouteDispatcher,
    assets: &Arc<AssetStore<S>>,
    state: &Arc<DeviceState<O>>,
    config: &HandlerConfig,
) -> Result<(), RouteError>
where
    S: AssetSource + Send + Sync + 'static,
    O: OutputControl + Send + Sync + 'static,
{
    let page = StatusPage::new(
        Arc::clone(assets),
        Arc::clone(state),
        config.index.clone(),
        config.led.clone(),
    )?;
    let on = SetRegister::new(Arc::clone(state), config.led.clone(), true)?;
    let off = SetRegister::new(Arc::clone(state), config.led.clone(), false)?;

    dispatcher.register(Method::Get, "/", page)?;
    dispatcher.register(Method::Post, "/api/on", on)?;
    dispatcher.register(Method::Post, "/api/off", off)?;
    Ok(())
}

fn ensure_register<O: OutputControl>(
    state: &DeviceState<O>,
    register: &RegisterName,
) -> Result<(), RouteError> {
    if state.contains(register) {
        Ok(())
    } else {
        Err(RouteError::Configuration(format!(
            "unknown register {register}"
        )))
    }
}

/// `GET /` — the index asset with `{{LED_STATE}}` substituted.
pub struct StatusPage<S, O> {
    assets: Arc<AssetStore<S>>,
    state: Arc<DeviceState<O>>,
    index: AssetName,
    register: RegisterName,
}

impl<S, O> StatusPage<S, O>
where
    S: AssetSource,
    O: OutputControl,
{
    /// # Errors
    ///
    /// Returns [`RouteError::Configuration`] if `register` does not exist.
    pub fn new(
        assets: Arc<AssetStore<S>>,
        state: Arc<DeviceState<O>>,
        index: AssetName,
        register: RegisterName,
    ) -> Result<Self, RouteError> {
        ensure_register(&state, &register)?;
        Ok(Self {
            assets,
            state,
            index,
            register,
        })
    }
}

impl<S, O> Handler for StatusPage<S, O>
where
    S: AssetSource + Send + Sync,
    O: OutputControl + Send + Sync,
{
    fn call(&self, _request: Request) -> HandlerFuture<'_> {
        Box::pin(async move {
            tracing::info!(asset = %self.index, "serving status page");
            let asset = self.assets.load(&self.index).await?;
            let value = self.state.get(&self.register)?;
            let substitutions = Substitutions::new().with(LED_STATE_TOKEN, on_off(value));
            let body = template::render(asset.bytes(), &substitutions)?;
            Ok(Response::html(body))
        })
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
}

/// `POST /api/on` and `POST /api/off` — set a register to a fixed value.
///
/// The JSON body is serialized once at construction, so repeated calls
/// return byte-identical responses.
pub struct SetRegister<O> {
    state: Arc<DeviceState<O>>,
    register: RegisterName,
    value: bool,
    response: Response,
}

impl<O: OutputControl> SetRegister<O> {
    /// # Errors
    ///
    /// Returns [`RouteError::Configuration`] if `register` does not exist.
    pub fn new(
        state: Arc<DeviceState<O>>,
        register: RegisterName,
        value: bool,
    ) -> Result<Self, RouteError> {
        ensure_register(&state, &register)?;
        let status = if value { "on" } else { "off" };
        let response = Response::json(&StatusBody { status })
            .map_err(|err| RouteError::Configuration(err.to_string()))?;
        Ok(Self {
            state,
            register,
            value,
            response,
        })
    }
}

impl<O> Handler for SetRegister<O>
where
    O: OutputControl + Send + Sync,
{
    fn call(&self, _request: Request) -> HandlerFuture<'_> {
        Box::pin(async move {
            tracing::info!(register = %self.register, value = self.value, "received set request");
            self.state.set(&self.register, self.value)?;
            Ok(self.response.clone())
        })
    }
}
