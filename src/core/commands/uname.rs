use std::ffi::CStr;
use std::io::{self, Write};
use std::mem::MaybeUninit;

use super::{Command, CommandError, Context};

/// Prints the kernel's system name (`Linux`, `Darwin`, ...).
#[derive(Clone)]
pub struct UnameCommand;

impl Default for UnameCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UnameCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn system_name() -> Result<String, CommandError> {
        let mut info = MaybeUninit::<libc::utsname>::zeroed();
        // SAFETY: uname fills the struct it is given; it is zeroed beforehand
        // so every field is a valid NUL-terminated array either way.
        if unsafe { libc::uname(info.as_mut_ptr()) } != 0 {
            return Err(CommandError::OsQuery(io::Error::last_os_error()));
        }
        // SAFETY: initialized by the zeroing and the successful call above.
        let info = unsafe { info.assume_init() };
        // SAFETY: sysname is NUL-terminated within its fixed-size buffer.
        let sysname = unsafe { CStr::from_ptr(info.sysname.as_ptr()) };
        Ok(sysname.to_string_lossy().into_owned())
    }
}

impl Command for UnameCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<(), CommandError> {
        let name = Self::system_name()?;
        writeln!(ctx.out, "{}", name)?;
        Ok(())
    }
}
