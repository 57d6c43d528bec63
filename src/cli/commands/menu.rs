//! Interactive character-menu loop, the original operator interface.
//!
//! Plain line-oriented prompts over stdin: no cursor addressing or screen
//! painting. Field prompts re-ask until the input is valid; every service
//! error is printed and control returns to the menu. EOF anywhere behaves
//! like choosing Exit, so the loop is drivable from a pipe.

use super::{checkout, search, status};
use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::{AppError, AppResult};
use crate::store::spots::SpotTable;
use crate::ui::messages::{error, header, info, warning};
use crate::utils::time::now_epoch;
use std::io::{self, BufRead, Write};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(&mut input, cfg)
}

fn run_menu<R: BufRead>(input: &mut R, cfg: &Config) -> AppResult<()> {
    let service = ParkingService::new(cfg);

    loop {
        print_menu(&service);

        let Some(choice) = read_trimmed(input, "Enter your choice (1-6)")? else {
            break;
        };

        match choice.as_str() {
            "1" => match service.status() {
                Ok(spots) => status::render(&spots),
                Err(e) => error(e),
            },
            "2" => {
                if !menu_check_in(input, &service)? {
                    break;
                }
            }
            "3" => {
                if !menu_check_out(input, &service, cfg)? {
                    break;
                }
            }
            "4" => {
                if !menu_search_owner(input, &service)? {
                    break;
                }
            }
            "5" => {
                if !menu_search_plate(input, &service)? {
                    break;
                }
            }
            "6" | "q" | "quit" | "exit" => break,
            "" => {}
            other => warning(format!("Invalid choice: '{}'", other)),
        }
    }

    info("Goodbye.");
    Ok(())
}

fn print_menu(service: &ParkingService) {
    println!();
    header("CAR PARK SYSTEM");
    println!("1. Display parking status");
    println!("2. Check in a car");
    println!("3. Check out a car");
    println!("4. Search by owner name");
    println!("5. Search by license plate");
    println!("6. Exit");

    if let Ok(spots) = service.status() {
        println!("Cars parked: {}", SpotTable::count_occupied(&spots));
    }
}

/// Menu handlers return `Ok(false)` on EOF so the loop can quit cleanly.
fn menu_check_in<R: BufRead>(input: &mut R, service: &ParkingService) -> AppResult<bool> {
    let Some(name) = prompt_nonempty(input, "Owner name")? else {
        return Ok(false);
    };
    let Some(plate) = prompt_nonempty(input, "License plate")? else {
        return Ok(false);
    };
    let Some(phone) = prompt_phone(input)? else {
        return Ok(false);
    };
    let Some(address) = prompt_nonempty(input, "Address")? else {
        return Ok(false);
    };
    let Some(spot) = prompt_spot(input, service.capacity())? else {
        return Ok(false);
    };

    match service.check_in(&name, &plate, &phone, &address, spot, now_epoch()) {
        Ok(session) => info(format!(
            "Car '{}' checked in to spot {}",
            session.plate, session.spot_id
        )),
        Err(e) => error(e),
    }
    Ok(true)
}

fn menu_check_out<R: BufRead>(
    input: &mut R,
    service: &ParkingService,
    cfg: &Config,
) -> AppResult<bool> {
    // Same fast-path as the service: do not prompt when the lot is empty.
    match service.status() {
        Ok(spots) if SpotTable::count_occupied(&spots) == 0 => {
            error(AppError::NothingParked);
            return Ok(true);
        }
        Err(e) => {
            error(e);
            return Ok(true);
        }
        Ok(_) => {}
    }

    let Some(plate) = prompt_nonempty(input, "License plate")? else {
        return Ok(false);
    };

    match service.check_out(&plate, now_epoch()) {
        Ok(receipt) => checkout::print_receipt(&receipt, cfg),
        Err(e) => error(e),
    }
    Ok(true)
}

fn menu_search_owner<R: BufRead>(input: &mut R, service: &ParkingService) -> AppResult<bool> {
    let Some(name) = prompt_nonempty(input, "Owner name")? else {
        return Ok(false);
    };
    match service.search_by_owner(&name) {
        Ok(history) => search::print_owner_history(&name, &history),
        Err(e) => error(e),
    }
    Ok(true)
}

fn menu_search_plate<R: BufRead>(input: &mut R, service: &ParkingService) -> AppResult<bool> {
    let Some(plate) = prompt_nonempty(input, "License plate")? else {
        return Ok(false);
    };
    match service.search_by_plate(&plate) {
        Ok(history) => search::print_plate_history(&plate, &history),
        Err(e) => error(e),
    }
    Ok(true)
}

/// Read one line, trimmed. `Ok(None)` means EOF.
fn read_trimmed<R: BufRead>(input: &mut R, label: &str) -> AppResult<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush().ok();

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn prompt_nonempty<R: BufRead>(input: &mut R, label: &str) -> AppResult<Option<String>> {
    loop {
        match read_trimmed(input, label)? {
            None => return Ok(None),
            Some(value) if value.is_empty() => warning(format!("{} cannot be empty", label)),
            Some(value) => return Ok(Some(value)),
        }
    }
}

fn prompt_phone<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    loop {
        match read_trimmed(input, "Phone number")? {
            None => return Ok(None),
            Some(value)
                if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) =>
            {
                return Ok(Some(value));
            }
            Some(value) => warning(AppError::InvalidPhone(value).to_string()),
        }
    }
}

fn prompt_spot<R: BufRead>(input: &mut R, capacity: u32) -> AppResult<Option<u32>> {
    let label = format!("Parking spot (1-{})", capacity);
    loop {
        match read_trimmed(input, &label)? {
            None => return Ok(None),
            Some(value) => match value.parse::<u32>() {
                Ok(n) if (1..=capacity).contains(&n) => return Ok(Some(n)),
                _ => warning(format!("Invalid spot number: '{}'", value)),
            },
        }
    }
}
