//! Exit handling: put the terminal back however the process ends.

/// Restore cooked mode with termios directly; crossterm state may be gone by
/// the time this runs.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

    // Only when stdin is a terminal; a piped run never left cooked mode.
    if unsafe { libc::isatty(0) } != 1 {
        return;
    }
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
