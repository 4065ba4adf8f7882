//! Grep over namespace content.
//!
//! Files are scanned line by line in document order. Folder searches visit
//! the folder's own files first and then, when recursive, each child folder
//! in pre-order, using an explicit stack instead of recursion.

use crate::error::{NamespaceError, Result};
use crate::index::{NamespaceData, NodeView};
use crate::query::{split_lines, LineMatcher, SearchOptions};
use crate::storage::{FileId, FolderId};
use crate::types::{GrepOutcome, MatchRecord};

/// Searches a single file. A file id that is no longer registered yields no
/// matches.
pub fn search_file(
    data: &NamespaceData,
    file: FileId,
    pattern: &str,
    options: &SearchOptions,
) -> Result<Vec<MatchRecord>> {
    let matcher = LineMatcher::compile(pattern, options);
    let mut results = Vec::new();
    collect_file_matches(data, file, &matcher, &mut results)?;
    Ok(results)
}

/// Searches every file directly in `folder`, and every descendant folder as
/// well when `options` asks for a recursive search.
pub fn search_folder(
    data: &NamespaceData,
    folder: FolderId,
    pattern: &str,
    options: &SearchOptions,
) -> Result<Vec<MatchRecord>> {
    let matcher = LineMatcher::compile(pattern, options);
    collect_folder_matches(data, folder, &matcher, options.is_recursive())
}

/// Runs a grep request relative to `current` (the cursor's folder).
///
/// `target_file` limits the search to that file of `current`, and
/// `target_folder` to that child folder; naming one that doesn't exist is
/// `NotFound`. Otherwise `current` itself is searched.
pub fn search_index_data(
    data: &NamespaceData,
    current: FolderId,
    pattern: &str,
    options: &SearchOptions,
) -> Result<GrepOutcome> {
    let matcher = LineMatcher::compile(pattern, options);

    let results = if let Some(name) = options.target_file.as_deref() {
        let file = data
            .find_child_file(current, name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
        let mut results = Vec::new();
        collect_file_matches(data, file, &matcher, &mut results)?;
        results
    } else {
        let folder = match options.target_folder.as_deref() {
            Some(name) => data
                .find_child_folder(current, name)
                .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?,
            None => current,
        };
        collect_folder_matches(data, folder, &matcher, options.is_recursive())?
    };

    log::debug!(
        "grep finished pattern={pattern:?} regex={} matches={}",
        matcher.is_regex(),
        results.len()
    );

    if options.is_count_only() {
        Ok(GrepOutcome::Count(results.len()))
    } else {
        Ok(GrepOutcome::Matches(results))
    }
}

fn collect_folder_matches(
    data: &NamespaceData,
    folder: FolderId,
    matcher: &LineMatcher,
    recursive: bool,
) -> Result<Vec<MatchRecord>> {
    data.folder(folder)?;

    let mut results = Vec::new();
    let mut stack = vec![folder];
    while let Some(current) = stack.pop() {
        for file in data.child_files(current) {
            collect_file_matches(data, file, matcher, &mut results)?;
        }
        if recursive {
            let children: Vec<FolderId> = data.child_folders(current).collect();
            stack.extend(children.into_iter().rev());
        }
    }
    Ok(results)
}

fn collect_file_matches(
    data: &NamespaceData,
    file: FileId,
    matcher: &LineMatcher,
    results: &mut Vec<MatchRecord>,
) -> Result<()> {
    let record = match data.file(file) {
        Ok(record) => record,
        Err(NamespaceError::NotFound(_)) => return Ok(()),
        Err(error) => return Err(error),
    };

    let lines = split_lines(record.content());
    if lines.is_empty() {
        return Ok(());
    }

    let mut located: Option<(String, String)> = None;
    for (index, line) in lines.into_iter().enumerate() {
        if !matcher.matches(line) {
            continue;
        }
        let (file_name, file_path) = match &located {
            Some(names) => names.clone(),
            None => {
                let names = (record.name(), NodeView::new(data, file).compute_path()?);
                located = Some(names.clone());
                names
            }
        };
        results.push(MatchRecord {
            file_name,
            file_path,
            line_number: index + 1,
            matched_line: line.to_string(),
            file_id: file,
        });
    }
    Ok(())
}
