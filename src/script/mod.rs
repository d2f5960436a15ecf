//! Embedded script host
//!
//! Runs a Lua script with two preloaded modules:
//!
//! - `aws`: `create(resource, payload)`, `list(resource, payload)`,
//!   `delete(resource, payload)`, each returning `(result, err)`. On failure
//!   the result is the empty table and `err` holds the reason; remote and
//!   dispatch failures come back through `err` rather than raising a Lua
//!   error.
//! - `twt`: `create(content)` returning `(token, err)` and
//!   `verify(token, content)` returning `err` or nil.
//!
//! Tables cross the boundary by value: a payload table converts to a dynamic
//! object before dispatch, results convert back to a fresh table. Cloud calls
//! block the script until the operation resolves.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use mlua::{Lua, LuaSerdeExt, Table, Value as LuaValue};
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::aws::provider::AwsProvider;
use crate::token::TokenProvider;
use crate::value::Obj;

pub struct ScriptHost {
    lua: Lua,
}

impl ScriptHost {
    /// Build a host with the `aws` and `twt` modules preloaded.
    pub fn new(
        provider: Arc<AwsProvider>,
        tokens: Arc<TokenProvider>,
        handle: Handle,
    ) -> Result<Self> {
        let lua = Lua::new();

        let preload: Table = lua
            .globals()
            .get::<Table>("package")?
            .get::<Table>("preload")?;

        preload.set(
            "aws",
            lua.create_function(move |lua, ()| {
                aws_module(lua, provider.clone(), handle.clone())
            })?,
        )?;
        preload.set(
            "twt",
            lua.create_function(move |lua, ()| token_module(lua, tokens.clone()))?,
        )?;

        Ok(Self { lua })
    }

    /// Run the script at `path` to completion.
    pub fn run_file(&self, path: &Path) -> Result<()> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        info!("running script: {}", path.display());
        self.lua
            .load(&source)
            .set_name(path.display().to_string())
            .exec()
            .with_context(|| format!("script {} failed", path.display()))
    }
}

fn aws_module(lua: &Lua, provider: Arc<AwsProvider>, handle: Handle) -> mlua::Result<Table> {
    let module = lua.create_table()?;

    {
        let provider = provider.clone();
        let handle = handle.clone();
        module.set(
            "create",
            lua.create_function(move |lua, (resource, payload): (String, Option<Table>)| {
                let payload = payload_to_obj(lua, payload)?;
                debug!("script call: aws.create({})", resource);
                result_pair(lua, handle.block_on(provider.create(&resource, payload)))
            })?,
        )?;
    }
    {
        let provider = provider.clone();
        let handle = handle.clone();
        module.set(
            "list",
            lua.create_function(move |lua, (resource, payload): (String, Option<Table>)| {
                let payload = payload_to_obj(lua, payload)?;
                debug!("script call: aws.list({})", resource);
                result_pair(lua, handle.block_on(provider.list(&resource, payload)))
            })?,
        )?;
    }
    module.set(
        "delete",
        lua.create_function(move |lua, (resource, payload): (String, Option<Table>)| {
            let payload = payload_to_obj(lua, payload)?;
            debug!("script call: aws.delete({})", resource);
            result_pair(lua, handle.block_on(provider.delete(&resource, payload)))
        })?,
    )?;

    Ok(module)
}

fn token_module(lua: &Lua, tokens: Arc<TokenProvider>) -> mlua::Result<Table> {
    let module = lua.create_table()?;

    {
        let tokens = tokens.clone();
        module.set(
            "create",
            lua.create_function(move |lua, content: Option<Table>| {
                let content = payload_to_obj(lua, content)?;
                match tokens.create(&content) {
                    Ok(token) => Ok((LuaValue::String(lua.create_string(&token)?), LuaValue::Nil)),
                    Err(e) => Ok((
                        LuaValue::Nil,
                        LuaValue::String(lua.create_string(e.to_string())?),
                    )),
                }
            })?,
        )?;
    }
    module.set(
        "verify",
        lua.create_function(move |lua, (token, content): (String, Option<Table>)| {
            let content = payload_to_obj(lua, content)?;
            match tokens.verify(&token, &content) {
                Ok(()) => Ok(LuaValue::Nil),
                Err(e) => Ok(LuaValue::String(lua.create_string(e.to_string())?)),
            }
        })?,
    )?;

    Ok(module)
}

/// Convert an optional script table into a dynamic object. A missing table is
/// the empty payload.
fn payload_to_obj(lua: &Lua, table: Option<Table>) -> mlua::Result<Obj> {
    match table {
        Some(table) => {
            let value: serde_json::Value = lua.from_value(LuaValue::Table(table))?;
            Ok(Obj::from_value(value))
        }
        None => Ok(Obj::new()),
    }
}

/// Shape an operation outcome into the script's `(result, err)` convention.
/// On failure the result is the empty table, never nil: scripts check the
/// error slot, since some successful operations legitimately return an empty
/// result.
fn result_pair(lua: &Lua, outcome: Result<Obj>) -> mlua::Result<(LuaValue, LuaValue)> {
    match outcome {
        Ok(result) => Ok((lua.to_value(&result)?, LuaValue::Nil)),
        Err(e) => {
            debug!("script call failed: {:#}", e);
            Ok((
                LuaValue::Table(lua.create_table()?),
                LuaValue::String(lua.create_string(format!("{:#}", e))?),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::http::ClientConfig;
    use tokio::runtime::Runtime;

    fn host(runtime: &Runtime) -> ScriptHost {
        let provider = Arc::new(AwsProvider::new(&ClientConfig {
            access_key: "ak".into(),
            secret_key: "sk".into(),
            region: "eu-west-1".into(),
            endpoint_url: None,
        }));
        let tokens = Arc::new(TokenProvider::new("secret"));
        ScriptHost::new(provider, tokens, runtime.handle().clone()).unwrap()
    }

    #[test]
    fn token_module_round_trips_from_lua() {
        let runtime = Runtime::new().unwrap();
        let host = host(&runtime);
        host.lua
            .load(
                r#"
                local twt = require("twt")
                local token, err = twt.create({name = "main"})
                assert(err == nil, err)
                assert(type(token) == "string")
                assert(twt.verify(token, {name = "main"}) == nil)
                assert(twt.verify(token, {name = "other"}) ~= nil)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn unknown_resource_comes_back_as_err_value() {
        let runtime = Runtime::new().unwrap();
        let host = host(&runtime);
        host.lua
            .load(
                r#"
                local aws = require("aws")
                local result, err = aws.create("warehouse", {})
                assert(type(result) == "table" and next(result) == nil)
                assert(string.find(err, "unknown resource", 1, true), err)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn missing_payload_table_is_the_empty_payload() {
        let runtime = Runtime::new().unwrap();
        let host = host(&runtime);
        host.lua
            .load(
                r#"
                local aws = require("aws")
                local result, err = aws.delete("warehouse")
                assert(next(result) == nil)
                assert(err ~= nil)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn run_file_reports_missing_script() {
        let runtime = Runtime::new().unwrap();
        let host = host(&runtime);
        let err = host.run_file(Path::new("/nonexistent/script.lua")).unwrap_err();
        assert!(err.to_string().contains("failed to read script"));
    }
}
