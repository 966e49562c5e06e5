//! Off-chain instruction builders.
//!
//! Each builder fills the account list in the order the program's `Accounts`
//! structs declare it, so callers only supply the signer and the text id.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::InstructionData;

use crate::{accounts, instruction, GlobalState, Text, ID};

pub fn global_address() -> Pubkey {
    GlobalState::address(&ID).0
}

pub fn text_address(id: u64) -> Pubkey {
    Text::address(id, &ID).0
}

pub fn initialize(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::Initialize {
            signer,
            global_account: global_address(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Initialize {}.data(),
    }
}

/// `next_id` must be the current `total_text_created`, otherwise the program
/// rejects the PDA.
pub fn create_text(signer: Pubkey, next_id: u64, title: String, content: String) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::CreateText {
            global_account: global_address(),
            signer,
            create_account: text_address(next_id),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::CreateText { title, content }.data(),
    }
}

pub fn read(id: u64) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::ReadText {
            global_account: global_address(),
            read_account: text_address(id),
        }
        .to_account_metas(None),
        data: instruction::Read { id }.data(),
    }
}

pub fn update(signer: Pubkey, id: u64, title: String, content: String) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::UpdateText {
            update_account: text_address(id),
            signer,
        }
        .to_account_metas(None),
        data: instruction::Update { id, title, content }.data(),
    }
}

pub fn delete(signer: Pubkey, id: u64) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: accounts::DeleteText {
            global_account: global_address(),
            signer,
            delete_account: text_address(id),
        }
        .to_account_metas(None),
        data: instruction::Delete { id }.data(),
    }
}
