use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// `dir/stem_N.ext` for `dir/stem.ext`; extension-less names get `name_N`.
///
/// The extension starts at the last dot of the file name, so `photo.tar.gz`
/// becomes `photo.tar_1.gz` and a dotfile such as `.bashrc` is all extension
/// and becomes `_1.bashrc`.
pub fn sibling_candidate(path: &Path, counter: u64) -> PathBuf {
    let file_name = path.file_name().unwrap_or_default();
    let mut name = OsString::new();
    if path.extension().is_none() && file_name.as_encoded_bytes().starts_with(b".") {
        // Empty stem.
        name.push(format!("_{counter}"));
        name.push(file_name);
    } else {
        name.push(path.file_stem().unwrap_or_default());
        name.push(format!("_{counter}"));
        if let Some(ext) = path.extension() {
            name.push(".");
            name.push(ext);
        }
    }
    path.with_file_name(name)
}

/// First of `path`, `stem_1.ext`, `stem_2.ext`, ... for which `exists` is false.
pub fn unique_sibling<F>(path: &Path, mut exists: F) -> PathBuf
where
    F: FnMut(&Path) -> bool,
{
    if !exists(path) {
        return path.to_path_buf();
    }

    let mut counter = 1;
    loop {
        let candidate = sibling_candidate(path, counter);
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
